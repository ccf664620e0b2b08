use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Unknown scraper(s): {}", .names.join(", "))]
    UnknownScrapers { names: Vec<String>, available: Vec<String> },

    #[error("Failed writing progress output: {0}")]
    Output(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn unknown_scrapers_message_lists_names() {
        let err = RunnerError::UnknownScrapers {
            names: vec!["bogus".into(), "shoes".into()],
            available: vec!["bags".into()],
        };
        assert_eq!(err.to_string(), "Unknown scraper(s): bogus, shoes");
    }

    #[test]
    fn io_errors_convert_to_output() {
        let err: RunnerError = io::Error::from(io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, RunnerError::Output(_)));
        assert!(err.to_string().starts_with("Failed writing progress output"));
    }
}
