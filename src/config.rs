use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

use crate::data::DEFAULT_QUESTIONS_PATH;
use crate::ui::{PageConfig, DEFAULT_SUBTITLE, DEFAULT_TITLE};

pub const DEFAULT_PORT: u16 = 5001;

/// Command-line configuration for the review server.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Serve a page of exam review questions", long_about = None)]
pub struct Config {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    pub questions: PathBuf,

    /// Address to bind to
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Heading shown at the top of the page
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn page(&self) -> PageConfig {
        PageConfig {
            title: self.title.clone(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["exam-review"]);
        assert_eq!(config.questions, PathBuf::from("questions.json"));
        assert_eq!(config.addr().to_string(), "0.0.0.0:5001");
        assert_eq!(config.page(), PageConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse_from([
            "exam-review",
            "-q",
            "exam.json",
            "--host",
            "127.0.0.1",
            "-p",
            "8080",
            "--title",
            "Final",
        ]);
        assert_eq!(config.questions, PathBuf::from("exam.json"));
        assert_eq!(config.addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.page().title, "Final");
    }
}
