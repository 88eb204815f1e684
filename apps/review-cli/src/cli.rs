use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use review_core::ApiConfig;
use review_types::{BulkAction, DocumentStatus, ExportFormat};

#[derive(Parser, Debug)]
#[command(
    name = "review",
    version,
    about = "Review AI-extracted contract attributes from the terminal"
)]
pub struct Cli {
    /// Review API base URL; sample data is used when unset
    #[arg(long, global = true, env = ApiConfig::API_BASE_URL_VAR)]
    pub api_base_url: Option<String>,

    /// Blob storage base URL for contract PDFs
    #[arg(long, global = true, env = ApiConfig::STORAGE_BASE_URL_VAR)]
    pub storage_base_url: Option<String>,

    #[arg(long, global = true, env = "REVIEW_EMAIL", default_value = "")]
    pub email: String,

    #[arg(
        long,
        global = true,
        env = "REVIEW_PASSWORD",
        default_value = "",
        hide_env_values = true
    )]
    pub password: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summary counts and the filtered document list
    Documents(DocumentsArgs),
    /// Approve or mark reviewed several documents at once
    Bulk(BulkArgs),
    /// Export documents to a file
    Export(ExportArgs),
    /// Review the extracted attributes of one contract
    Review(ReviewArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DocumentsArgs {
    /// Case-insensitive title filter
    #[arg(long, default_value = "")]
    pub search: String,

    /// pending, reviewed or approved
    #[arg(long)]
    pub status: Option<DocumentStatus>,
}

#[derive(Args, Debug, Clone)]
pub struct BulkArgs {
    /// approve or review
    pub action: BulkAction,

    #[arg(required = true)]
    pub ids: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[arg(long, default_value = "csv")]
    pub format: ExportFormat,

    /// Comma-separated ids; all documents when omitted
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<String>,

    /// Nest each document's attributes (JSON only)
    #[arg(long, default_value_t = false)]
    pub include_attributes: bool,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct ReviewArgs {
    pub id: String,

    /// Filter attributes by name, section or category
    #[arg(long, default_value = "")]
    pub search: String,

    /// Attribute to show in the viewer panel
    #[arg(long)]
    pub select: Option<String>,

    /// Corrected value, as ATTR_ID=VALUE
    #[arg(long = "set", value_parser = parse_assignment)]
    pub corrections: Vec<(String, String)>,

    /// Copy every extracted value into the corrected field first
    #[arg(long, default_value_t = false)]
    pub accept_all: bool,

    #[arg(long, default_value_t = false)]
    pub save: bool,

    #[arg(long)]
    pub export: Option<ExportFormat>,

    #[arg(long, default_value = ".")]
    pub out: PathBuf,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => {
            Ok((id.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected ATTR_ID=VALUE, got `{s}`")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assignment_keeps_value_verbatim() {
        assert_eq!(
            parse_assignment("attr-001-2=Net 45 = final").unwrap(),
            ("attr-001-2".to_string(), "Net 45 = final".to_string())
        );
        assert!(parse_assignment("=x").is_err());
        assert!(parse_assignment("attr-001-2").is_err());
    }

    #[test]
    fn review_command_parses() {
        let cli = Cli::try_parse_from([
            "review",
            "review",
            "doc-001",
            "--set",
            "attr-001-4=Capped at fees",
            "--save",
            "--export",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Review(args) => {
                assert_eq!(args.id, "doc-001");
                assert_eq!(args.corrections.len(), 1);
                assert!(args.save);
                assert_eq!(args.export, Some(ExportFormat::Json));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn export_ids_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "review",
            "export",
            "--ids",
            "doc-001,doc-004",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.ids, vec!["doc-001", "doc-004"]);
                assert_eq!(args.format, ExportFormat::Json);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn bulk_parses_action() {
        let cli = Cli::try_parse_from(["review", "bulk", "approve", "doc-001", "doc-003"]).unwrap();
        match cli.command {
            Commands::Bulk(args) => {
                assert_eq!(args.action, BulkAction::Approve);
                assert_eq!(args.ids.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
