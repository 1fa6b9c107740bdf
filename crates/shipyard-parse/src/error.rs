use thiserror::Error;

#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("line {line}: expected a '**Section**' header or a '- ' bullet, found '{content}'")]
    UnexpectedLine { line: usize, content: String },

    #[error("line {line}: continuation line without a preceding bullet")]
    OrphanContinuation { line: usize },

    #[error("line {line}: section header has an empty label")]
    EmptyHeader { line: usize },

    #[error("input exceeds maximum size of {max_bytes} bytes")]
    InputTooLarge { max_bytes: usize },
}
