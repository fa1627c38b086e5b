mod cli;
mod error;

use crate::cli::Cli;
use crate::error::{ErrorKind, Result};
use clap::Parser;
use exn::ResultExt;
use polscan_config::Config;
use polscan_export::Summary;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "polscan=info,polscan_scan=info,polscan_export=info,polscan_config=info";

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Missing `.env` is the common case, not an error.
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with_writer(std::io::stderr)
        .init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let config = cli.apply(config);
    run(&config, cli.quiet)
}

fn run(config: &Config, quiet: bool) -> Result<()> {
    tracing::info!("Starting document processing");
    let records = polscan_scan::scan(&config.root_directory).or_raise(|| ErrorKind::Scan)?;
    if !quiet {
        print!("{}", Summary::from_records(&records));
    }
    let path = polscan_export::export(&records, &config.output_directory).or_raise(|| ErrorKind::Export)?;
    tracing::info!(path = %path.display(), count = records.len(), "Document processing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{create_dir_all, read_to_string, write};

    #[test]
    fn test_run_writes_metadata_table() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("raw");
        create_dir_all(root.join("ManualA/Policy")).unwrap();
        create_dir_all(root.join("ManualB/Tools")).unwrap();
        create_dir_all(root.join("Unrelated/Drafts")).unwrap();
        write(root.join("ManualA/Policy/01_Fall_Prevention.docx"), b"").unwrap();
        write(root.join("ManualB/Tools/readme.txt"), b"").unwrap();
        let output = temp_dir.path().join("processed/nested");
        let config = Config::default().with_root_directory(&root).with_output_directory(&output);

        run(&config, true).unwrap();

        let table = read_to_string(output.join(polscan_export::METADATA_FILENAME)).unwrap();
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines[0], "policy_manual,resource_type,index,name,filename,file_path,extension");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("ManualA,Policy,01,Fall Prevention,01_Fall_Prevention.docx,"));
        assert!(lines[1].ends_with(",docx"));
        assert!(lines[2].starts_with("ManualB,Tools,0,readme,readme.txt,"));
        assert!(lines[2].ends_with(",txt"));
    }

    #[test]
    fn test_run_with_empty_root_writes_header_only() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path().join("raw");
        create_dir_all(&root).unwrap();
        let output = temp_dir.path().join("processed");
        let config = Config::default().with_root_directory(&root).with_output_directory(&output);

        run(&config, false).unwrap();

        let table = read_to_string(output.join(polscan_export::METADATA_FILENAME)).unwrap();
        assert_eq!(table, "policy_manual,resource_type,index,name,filename,file_path,extension\n");
    }

    #[test]
    fn test_run_missing_root_fails_before_export() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("processed");
        let config = Config::default()
            .with_root_directory(temp_dir.path().join("missing"))
            .with_output_directory(&output);

        let err = run(&config, true).unwrap_err();
        assert_eq!(*err, ErrorKind::Scan);
        assert!(!output.exists());
    }
}
