use anyhow::{Context, Result};
use reqwest::Client;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info, warn};

use crate::models::Column;
use crate::scrapers::PriceSource;
use crate::table::PriceTable;

pub const HELP: &str = "\
Type a drug name and press Enter to search.
  :sort <column>   sort by name|form|price|manufacturer|note|source (repeat to reverse)
  :show            print the current results again
  :export <path>   save the current results as JSON
  :help            this text
  :quit            exit";

/// Next input line, `None` at EOF. Bytes that are not UTF-8 (a GBK
/// terminal, say) are replaced rather than ending the session.
pub async fn read_input_line<R>(reader: &mut R) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut buf = Vec::new();
    if reader.read_until(b'\n', &mut buf).await? == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf);
    if line.contains(char::REPLACEMENT_CHARACTER) {
        warn!("Input line is not valid UTF-8, undecodable bytes were replaced");
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Sort(Column),
    Show,
    Export(PathBuf),
    Help,
    Quit,
    Invalid(String),
}

impl Command {
    /// Anything not starting with `:` is a search keyword, passed on verbatim.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let Some(command) = line.trim_start().strip_prefix(':') else {
            return Command::Search(line.to_string());
        };

        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command.trim(), ""),
        };

        match name {
            "sort" | "s" => match Column::from_key(arg) {
                Some(column) => Command::Sort(column),
                None => Command::Invalid(format!("unknown column {:?}", arg)),
            },
            "show" => Command::Show,
            "export" if !arg.is_empty() => Command::Export(PathBuf::from(arg)),
            "export" => Command::Invalid("export needs a file path".to_string()),
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => Command::Invalid(format!("unknown command :{}", other)),
        }
    }
}

pub enum Outcome {
    Continue(Option<String>),
    Quit,
}

/// One interactive session: a price source, its HTTP client and the grid.
pub struct Session {
    source: Box<dyn PriceSource>,
    client: Client,
    table: PriceTable,
}

impl Session {
    pub fn new(source: Box<dyn PriceSource>, client: Client) -> Self {
        Self {
            source,
            client,
            table: PriceTable::new(),
        }
    }

    pub fn table(&self) -> &PriceTable {
        &self.table
    }

    /// Run one search. On failure the error is logged and the previous
    /// rows stay on screen. Returns whether the table was replaced.
    pub async fn search(&mut self, keyword: &str) -> bool {
        match self.source.search(&self.client, keyword).await {
            Ok(rows) => {
                info!("Displaying {} rows from {}", rows.len(), self.source.name());
                self.table.replace_rows(rows);
                true
            }
            Err(e) if e.is_transport() => {
                error!("Error fetching data: {}", e);
                false
            }
            Err(e) => {
                error!("Error processing data: {}", e);
                false
            }
        }
    }

    pub fn export(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self.table.rows())
            .context("Failed to serialize results")?;
        fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Exported {} rows to {}", self.table.len(), path.display());
        Ok(())
    }

    pub async fn handle(&mut self, command: Command) -> Outcome {
        match command {
            Command::Search(keyword) => {
                if self.search(&keyword).await {
                    Outcome::Continue(Some(self.table.render()))
                } else {
                    Outcome::Continue(None)
                }
            }
            Command::Sort(column) => {
                self.table.sort_by(column);
                Outcome::Continue(Some(self.table.render()))
            }
            Command::Show => Outcome::Continue(Some(self.table.render())),
            Command::Export(path) => {
                if let Err(e) = self.export(&path) {
                    error!("{:#}", e);
                }
                Outcome::Continue(None)
            }
            Command::Help => Outcome::Continue(Some(HELP.to_string())),
            Command::Quit => Outcome::Quit,
            Command::Invalid(message) => {
                warn!("{}", message);
                Outcome::Continue(Some(HELP.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SearchError, SearchResult};
    use crate::models::PriceRow;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Serves queued responses in order.
    struct CannedSource {
        responses: Mutex<Vec<SearchResult<Vec<PriceRow>>>>,
    }

    impl CannedSource {
        fn new(mut responses: Vec<SearchResult<Vec<PriceRow>>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
            }
        }
    }

    #[async_trait]
    impl PriceSource for CannedSource {
        async fn search(&self, _client: &Client, _keyword: &str) -> SearchResult<Vec<PriceRow>> {
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    fn row(name: &str, price: &str) -> PriceRow {
        PriceRow {
            name: name.into(),
            price: price.into(),
            ..Default::default()
        }
    }

    #[test]
    fn parses_commands() {
        assert_eq!(Command::parse("阿莫西林"), Command::Search("阿莫西林".into()));
        assert_eq!(Command::parse(""), Command::Search(String::new()));
        assert_eq!(Command::parse(" vc \r"), Command::Search(" vc ".into()));
        assert_eq!(Command::parse(":sort price"), Command::Sort(Column::Price));
        assert_eq!(Command::parse(":sort 来源"), Command::Sort(Column::Source));
        assert_eq!(Command::parse(":export out.json"), Command::Export("out.json".into()));
        assert_eq!(Command::parse(":q"), Command::Quit);
        assert_eq!(Command::parse(":show"), Command::Show);
        assert!(matches!(Command::parse(":sort cost"), Command::Invalid(_)));
        assert!(matches!(Command::parse(":export"), Command::Invalid(_)));
        assert!(matches!(Command::parse(":frobnicate"), Command::Invalid(_)));
    }

    #[tokio::test]
    async fn failed_search_keeps_previous_rows() {
        let source = CannedSource::new(vec![
            Ok(vec![row("a", "1"), row("b", "2")]),
            Err(SearchError::DataShape("table #jiagetable not found".into())),
        ]);
        let mut session = Session::new(Box::new(source), Client::new());

        assert!(session.search("first").await);
        assert!(!session.search("second").await);

        let names: Vec<&str> = session.table().rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn transport_failure_keeps_previous_rows() {
        // Nothing listens on port 1
        let refused = Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .unwrap_err();

        let source = CannedSource::new(vec![
            Ok(vec![row("a", "1"), row("b", "2")]),
            Err(SearchError::Transport(refused)),
        ]);
        let mut session = Session::new(Box::new(source), Client::new());

        assert!(session.search("first").await);
        let before = session.table().rows().to_vec();
        let fetched_at = session.table().fetched_at();

        assert!(matches!(
            session.handle(Command::Search("second".into())).await,
            Outcome::Continue(None)
        ));
        assert_eq!(session.table().rows(), before.as_slice());
        assert_eq!(session.table().fetched_at(), fetched_at);
    }

    #[tokio::test]
    async fn undecodable_input_does_not_end_reading() {
        let mut input: &[u8] = b"\xb0\xa2\xcb\xbe\n:help\r\n:quit";

        let first = read_input_line(&mut input).await.unwrap().unwrap();
        assert!(first.contains(char::REPLACEMENT_CHARACTER));
        assert!(matches!(Command::parse(&first), Command::Search(_)));

        assert_eq!(read_input_line(&mut input).await.unwrap(), Some(":help".to_string()));
        assert_eq!(read_input_line(&mut input).await.unwrap(), Some(":quit".to_string()));
        assert_eq!(read_input_line(&mut input).await.unwrap(), None);
    }

    #[tokio::test]
    async fn sort_command_reorders_and_renders() {
        let source = CannedSource::new(vec![Ok(vec![row("a", "10"), row("b", "2"), row("c", "30")])]);
        let mut session = Session::new(Box::new(source), Client::new());
        session.handle(Command::Search("x".into())).await;

        let Outcome::Continue(Some(rendered)) = session.handle(Command::Sort(Column::Price)).await
        else {
            panic!("sort should render the table");
        };
        assert!(rendered.contains("价格 ▲"));

        let prices: Vec<&str> = session.table().rows().iter().map(|r| r.price.as_str()).collect();
        assert_eq!(prices, vec!["2", "10", "30"]);
    }

    #[tokio::test]
    async fn export_writes_displayed_rows() {
        let source = CannedSource::new(vec![Ok(vec![row("阿司匹林", "0.5")])]);
        let mut session = Session::new(Box::new(source), Client::new());
        session.search("阿司匹林").await;

        let path = std::env::temp_dir().join(format!("drug-price-export-{}.json", std::process::id()));
        session.export(&path).unwrap();

        let written: Vec<PriceRow> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(written, vec![row("阿司匹林", "0.5")]);
    }
}
