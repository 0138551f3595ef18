//! Interactive single-user todo console. Tasks live in memory and are gone
//! when the process exits.

use std::io::{self, BufRead, Write};

use clap::Parser;

use todo_api_rust::console::TaskManager;

#[derive(Debug, Parser)]
#[command(name = "todo", about = "Single-user in-memory todo console", version)]
struct Cli {
    /// Commands to run before entering the interactive loop, e.g. -c "add Buy milk"
    #[arg(short = 'c', long = "command")]
    commands: Vec<String>,

    /// Exit after running -c commands instead of entering the interactive loop
    #[arg(long)]
    no_interactive: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut manager = TaskManager::new();

    for command in &cli.commands {
        run_command(&mut manager, command);
    }

    if cli.no_interactive {
        return Ok(());
    }

    println!("Todo console - type 'help' for commands, 'quit' to exit");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        run_command(&mut manager, line);
    }

    println!("Goodbye!");
    Ok(())
}

fn run_command(manager: &mut TaskManager, line: &str) {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "help" => print_help(),
        "add" => {
            // Optional description after " -- "
            let (title, description) = match rest.split_once(" -- ") {
                Some((title, description)) => (title, description),
                None => (rest, ""),
            };
            match manager.add_task(title, description) {
                Ok(task) => println!("Added {}", task),
                Err(e) => println!("Error: {}", e),
            }
        }
        "list" => {
            if manager.all_tasks().is_empty() {
                println!("No tasks yet");
            }
            for task in manager.all_tasks() {
                println!("{}", task);
            }
        }
        "pending" => {
            for task in manager.pending_tasks() {
                println!("{}", task);
            }
        }
        "done" | "undo" => match parse_id(rest) {
            Some(id) => match manager.set_completed(id, command == "done") {
                Some(task) => println!("Updated {}", task),
                None => println!("No task with id {}", id),
            },
            None => println!("Usage: {} <id>", command),
        },
        "rm" => match parse_id(rest) {
            Some(id) => {
                if manager.delete_task(id) {
                    println!("Deleted task {}", id);
                } else {
                    println!("No task with id {}", id);
                }
            }
            None => println!("Usage: rm <id>"),
        },
        _ => println!("Unknown command '{}', type 'help'", command),
    }
}

fn parse_id(input: &str) -> Option<u64> {
    input.trim().parse().ok()
}

fn print_help() {
    println!("Commands:");
    println!("  add <title> [-- <description>]   create a task");
    println!("  list                             show all tasks");
    println!("  pending                          show unfinished tasks");
    println!("  done <id> / undo <id>            toggle completion");
    println!("  rm <id>                          delete a task");
    println!("  quit                             exit");
}
