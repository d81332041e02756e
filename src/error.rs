use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("No element with id '{id}' on the page"))]
    ElementNotFound { id: String },

    #[snafu(display("Element '{id}' is a <{tag}>, not a file input"))]
    NotAFileInput { id: String, tag: String },

    #[snafu(display("Confirmation prompt failed: {message}"))]
    PromptInteraction { message: String },

    #[snafu(display("Invalid argument: {message}"))]
    InvalidArgument { message: String },

    #[snafu(display("Failed to read page fixture '{}': {source}", path.display()))]
    FixtureIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[snafu(display("Failed to parse page fixture: {source}"))]
    FixtureParse { source: serde_json::Error },
}
