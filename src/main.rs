//! Contact form CLI.
//!
//! Exposes the phone mask and field rules on the command line, and drives
//! an in-memory form for submit and typing simulations.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use contact_form::{
    validate, FieldHandle, FieldKind, FormConfig, FormController, FormEvent, FormReport,
    MemoryField, MemoryForm, PhoneMask,
};

/// Contact form helper
///
/// Validates contact form fields and applies the phone-number mask.
#[derive(Parser)]
#[command(name = "contact-form")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the phone mask to arbitrary text
    Format {
        /// Raw text, e.g. "11912345678" or "(11) 9123-45678"
        text: String,

        /// Print the sanitized digits instead of the mask
        #[arg(long)]
        digits: bool,
    },

    /// Validate a single field value
    Validate {
        /// Field kind: name, email, subject, message or phone
        #[arg(short, long, value_name = "KIND")]
        kind: FieldKind,

        /// Value to check
        value: String,
    },

    /// Submit a form built from the given fields (omitted fields are absent)
    Submit {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        subject: Option<String>,

        #[arg(long)]
        message: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// Element id used for the phone field
        #[arg(long, value_name = "ID", default_value = "phone")]
        phone_id: String,

        /// Acknowledgement shown on success
        #[arg(long, value_name = "TEXT")]
        success_message: Option<String>,

        /// Keep the values after a successful submit
        #[arg(long)]
        no_reset: bool,
    },

    /// Replay keystrokes into a phone field
    Type {
        /// Keys to press; digits and symbols are split per character,
        /// named keys (Backspace, ArrowLeft, ...) are taken whole
        keys: Vec<String>,

        /// Text pasted into the field before typing
        #[arg(long, value_name = "TEXT")]
        paste: Option<String>,
    },
}

/// Command handler holding the presentation configuration.
struct FormHandler {
    config: FormConfig,
}

impl FormHandler {
    fn new(config: FormConfig) -> Self {
        Self { config }
    }

    fn format(&self, text: &str, digits: bool) -> Result<()> {
        let sanitized = PhoneMask::sanitize(text);
        if digits {
            println!("{}", sanitized);
        } else {
            println!("{}", PhoneMask::format(&sanitized));
        }
        Ok(())
    }

    fn validate(&self, kind: FieldKind, value: &str) -> Result<()> {
        let state = validate(kind, value);
        if !state.is_valid {
            anyhow::bail!("{}: {}", kind, state.message);
        }
        println!("✓ {} is valid", kind);
        Ok(())
    }

    fn submit(&self, fields: &[(&str, Option<&String>)]) -> Result<()> {
        let mut form = MemoryForm::new();
        for (id, value) in fields {
            if let Some(value) = value {
                form.insert_field(id, MemoryField::new(value));
            }
        }

        let mut controller = FormController::with_config(form, self.config.clone());
        let outcome = controller.handle(FormEvent::Submit);
        let report = outcome
            .report
            .context("Submit did not produce a validation report")?;

        print_report(&report);
        for notice in controller.environment().notifications() {
            println!("{}", notice);
        }

        if !report.is_valid() {
            anyhow::bail!(
                "Form is invalid: {} field(s) failed validation",
                report.failures().count()
            );
        }
        Ok(())
    }

    fn type_keys(&self, keys: &[String], paste: Option<&str>) -> Result<()> {
        const FIELD: &str = "phone";
        let form = MemoryForm::new().with_field(FIELD, MemoryField::new(""));
        let mut controller = FormController::with_config(form, self.config.clone());

        if let Some(text) = paste {
            controller.paste(FIELD, text);
        }
        for key in split_keys(keys) {
            let outcome = controller.type_key(FIELD, &key);
            if outcome.default_prevented {
                println!("⚠ Rejected key {:?}", key);
            }
        }

        let field = controller.environment().require(FIELD)?;
        println!("Value: {}", field.value());
        println!(
            "Caret: {}",
            field.caret().map_or_else(|| "-".to_string(), |c| c.to_string())
        );
        match field.error_text() {
            Some(message) if field.error_visible() => println!("✗ {}", message),
            _ => println!("✓ valid"),
        }
        Ok(())
    }
}

/// Splits CLI key arguments into individual key identifiers.
fn split_keys(args: &[String]) -> Vec<String> {
    args.iter()
        .flat_map(|arg| {
            if arg.chars().count() > 1 && arg.chars().all(|c| c.is_ascii_alphabetic()) {
                vec![arg.clone()]
            } else {
                arg.chars().map(String::from).collect()
            }
        })
        .collect()
}

fn print_report(report: &FormReport) {
    for state in report.states() {
        if state.is_valid {
            println!("✓ {}", state.kind);
        } else {
            println!("✗ {}: {}", state.kind, state.message);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Format { text, digits } => {
            FormHandler::new(FormConfig::default()).format(text, *digits)
        }
        Commands::Validate { kind, value } => {
            FormHandler::new(FormConfig::default()).validate(*kind, value)
        }
        Commands::Submit {
            name,
            email,
            subject,
            message,
            phone,
            phone_id,
            success_message,
            no_reset,
        } => {
            let phone_id = FieldKind::phone_id(phone_id)?;
            let mut config = FormConfig::default().with_reset_on_success(!no_reset);
            if let Some(text) = success_message {
                config = config.with_success_message(text);
            }
            FormHandler::new(config).submit(&[
                ("name", name.as_ref()),
                ("email", email.as_ref()),
                ("subject", subject.as_ref()),
                ("message", message.as_ref()),
                (phone_id, phone.as_ref()),
            ])
        }
        Commands::Type { keys, paste } => {
            FormHandler::new(FormConfig::default()).type_keys(keys, paste.as_deref())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_keys() {
        let keys = split_keys(&[
            "119".to_string(),
            "Backspace".to_string(),
            "a-".to_string(),
        ]);
        assert_eq!(keys, vec!["1", "1", "9", "Backspace", "a", "-"]);
    }

    #[test]
    fn test_single_letter_is_a_character() {
        assert_eq!(split_keys(&["x".to_string()]), vec!["x"]);
    }
}
