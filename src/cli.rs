use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use activity_board::{
    api::BoardSync,
    app::LOAD_FAILED_TEXT,
    storage::config::Config,
    ui::view::{ListView, build_cards, render_plain},
};

pub const USAGE: &str = "Usage: activity-board [--server URL] [--list]";

#[derive(Debug, Clone, PartialEq)]
pub enum CliMode {
    Interactive { server: Option<String> },
    List { server: Option<String> },
    Help,
}

pub fn parse_cli_mode<I>(args: I) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut list = false;
    let mut server = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" => {
                list = true;
            }
            "--server" => {
                let url = args
                    .next()
                    .filter(|value| !value.starts_with("--"))
                    .ok_or_else(|| "--server requires a URL".to_string())?;
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(format!("Invalid server URL '{}'. Use http:// or https://.", url));
                }
                server = Some(url);
            }
            "--help" | "-h" => return Ok(CliMode::Help),
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if list {
        Ok(CliMode::List { server })
    } else {
        Ok(CliMode::Interactive { server })
    }
}

pub async fn run_list_mode(config: Config) -> Result<(), io::Error> {
    let sync = BoardSync::new(&config);

    let text = match sync.fetch_board().await {
        Ok(board) => render_plain(&ListView::Cards(build_cards(&board))),
        Err(e) => {
            tracing::error!("Error fetching activities: {}", e);
            eprintln!("{}", e);
            LOAD_FAILED_TEXT.to_string()
        }
    };

    display_with_pager(&text)
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let Some(cmd) = parts.next() else {
        println!("{text}");
        return Ok(());
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}
