use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::commands::base_commands::Commands;
use crate::commands::predict_cmd::connect_session;
use crate::commands::view_format::format_view;
use crate::domain::reservation::ReservationField;
use crate::domain::view_model::{ViewEvent, ViewModel};
use crate::services::prediction_session::ViewObserver;

const HELP: &str = "Commands:
  set <field> <value>  change a form field
  predict              request a cancellation forecast
  show                 redraw the form
  fields               list field names and accepted values
  help                 show this help
  quit                 leave the form";

#[derive(Debug, PartialEq, Eq)]
enum FormInput {
    Set { name: String, value: String },
    Predict,
    Show,
    Fields,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Splits a line into a command. The value of `set` is everything after the
/// whitespace that follows the field name, kept as typed.
fn parse_form_input(line: &str) -> FormInput {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim_start()),
        None => (line, ""),
    };

    match command {
        "" => FormInput::Empty,
        "set" => {
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            FormInput::Set {
                name: name.to_string(),
                value: value.trim_start().to_string(),
            }
        }
        "predict" => FormInput::Predict,
        "show" => FormInput::Show,
        "fields" => FormInput::Fields,
        "help" => FormInput::Help,
        "quit" | "exit" => FormInput::Quit,
        other => FormInput::Unknown(other.to_string()),
    }
}

fn format_field_list() -> String {
    ReservationField::ALL
        .into_iter()
        .map(|field| match field.options() {
            Some(options) => format!("{}: {}", field.name(), options.join(", ")),
            None => format!("{}: number", field.name()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Redraws the whole form on stdout whenever it changes.
struct TerminalRedraw;

impl ViewObserver for TerminalRedraw {
    fn on_event(&mut self, event: &ViewEvent, view: &ViewModel<'_>) {
        match event {
            ViewEvent::FieldChanged(_) | ViewEvent::LoadingChanged(_) => {
                println!("{}\n", format_view(view));
            }
            // Drawn by the loading change that follows.
            ViewEvent::ResultReady | ViewEvent::Notification(_) => {}
        }
    }
}

pub async fn form_command(cmd: Commands) -> ExitCode {
    if let Commands::Form { config, base_url } = cmd {
        let mut session = match connect_session(config.as_deref(), base_url) {
            Ok(session) => session,
            Err(e) => {
                eprintln!("Failed to configure prediction service: {e:?}");
                return ExitCode::FAILURE;
            }
        };
        session.subscribe(Box::new(TerminalRedraw));

        println!("{}\n", format_view(&session.view()));
        println!("{HELP}\n");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    eprintln!("Failed to read input: {e:?}");
                    return ExitCode::FAILURE;
                }
            };

            match parse_form_input(&line) {
                FormInput::Set { name, value } => {
                    if let Err(e) = session.update_field(&name, &value) {
                        println!("{e}. Type 'fields' to list the form fields.");
                    }
                }
                // Failures end up in the view's error field.
                FormInput::Predict => {
                    let _ = session.predict().await;
                }
                FormInput::Show => println!("{}\n", format_view(&session.view())),
                FormInput::Fields => println!("{}\n", format_field_list()),
                FormInput::Help => println!("{HELP}\n"),
                FormInput::Quit => break,
                FormInput::Empty => {}
                FormInput::Unknown(command) => {
                    println!("Unknown command: {command}. Type 'help' for the list.")
                }
            }
        }
    }
    ExitCode::SUCCESS
}
