//! Rulang: a small rule language embedded in a host application.
//!
//! ```text
//! text -> rulang_lexer::lex -> rulang_parse::parse -> Engine::execute(&mut Context)
//! ```
//!
//! [`compile`] turns source into a reusable [`Engine`]; [`run`] compiles and
//! executes in one step. All three error families are wrapped so a host can
//! handle them with one `?`.

use std::sync::Once;

use thiserror::Error;

pub use rulang_eval::{
    buffer_handler, callback_handler, silent_handler, tracing_handler, BufferLogHandler, Builtin,
    Context, DomainModel, Engine, EvalError, EvalResult, InMemoryModel, LogCallback, LogHandler,
    SharedLogHandler, Value, LOG_TARGET, LOOP_VALUE_NAME,
};
pub use rulang_ir::{Sequence, SourceLocation, Span};
pub use rulang_lexer::LexError;
pub use rulang_parse::ParseError;

/// Failure to turn source text into a program.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CompileError {
    pub fn span(&self) -> Span {
        match self {
            CompileError::Lex(err) => err.span(),
            CompileError::Parse(err) => err.span,
        }
    }

    /// Byte offset of the offending input.
    pub fn offset(&self) -> u32 {
        self.span().start
    }

    /// `line:column: message`, located against the source it came from.
    pub fn render(&self, source: &str) -> String {
        let location = SourceLocation::of(source, self.offset());
        format!("{location}: {self}")
    }
}

/// Any failure of [`run`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RuleError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl From<LexError> for RuleError {
    fn from(err: LexError) -> Self {
        RuleError::Compile(err.into())
    }
}

impl From<ParseError> for RuleError {
    fn from(err: ParseError) -> Self {
        RuleError::Compile(err.into())
    }
}

/// Lex and parse `source` into an engine.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn compile(source: &str) -> Result<Engine, CompileError> {
    let tokens = rulang_lexer::lex(source)?;
    let program = rulang_parse::parse(&tokens)?;
    Ok(Engine::new(program))
}

/// Compile `source` and execute it once against `ctx`.
pub fn run(source: &str, ctx: &mut Context) -> Result<(), RuleError> {
    compile(source)?.execute(ctx)?;
    Ok(())
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=rulang_parse=trace` or `RUST_LOG=rulang::log=info`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
