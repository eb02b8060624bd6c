use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input ended while waiting for {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("script line {line}: cannot read '{text}' as an answer")]
    Script { line: usize, text: String },
}

pub type Result<T> = std::result::Result<T, InputError>;
