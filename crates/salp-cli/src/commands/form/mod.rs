mod parse;

use std::io::Write as _;

use salp_client::Predictor;
use salp_core::InputRecord;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

pub use parse::FormCommand;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FormArgs;
use crate::context::AppContext;
use crate::form::FormState;
use crate::progress::Progress;
use crate::render;
use crate::session::Session;
use crate::ui;

const HELP: &str = "\
Commands:
  <field>=<value>      set a field (by key, snake_case key, or number)
  set <field> <value>  same as above
  show                 print the form
  submit               request a prediction for the current values
  reset                restore the default values
  help                 print this help
  quit                 leave the form (Ctrl-C also leaves, even mid-request)";

/// What the prompt loop does after one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Step {
    Print(String),
    Quit,
    Cancelled,
}

/// Ctrl-C, listened for once for the whole prompt loop. The same listener
/// covers the prompt and in-flight submits.
pub struct Interrupt(watch::Receiver<bool>);

impl Interrupt {
    fn listen() -> Self {
        let (tx, rx) = watch::channel(false);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    let _ = tx.send(true);
                }
                Err(error) => tracing::warn!(%error, "could not listen for Ctrl-C"),
            }
        });
        Self(rx)
    }

    /// Resolves once Ctrl-C was pressed; never resolves without a listener.
    async fn wait(&mut self) {
        if self.0.wait_for(|interrupted| *interrupted).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Handle `salp form`.
pub async fn handle(args: &FormArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let color = ui::prefs().color;
    let mut session = Session::new(ctx.client.clone());
    let mut form = FormState::new(InputRecord::default(), ctx.numeric_policy(args.strict));
    form.sync(session.record());

    if !flags.quiet {
        println!("Salary prediction form (posting to {})", ctx.client.endpoint());
        println!("Type 'help' for commands.\n");
    }
    println!("{}", render::form_lines(&form, color));

    let mut interrupt = Interrupt::listen();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("salp> ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            () = interrupt.wait() => {
                println!("\nCancelled.");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };
        let command = match FormCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match execute(command, &mut form, &mut session, &mut interrupt, color).await {
            Step::Print(text) if text.is_empty() => {}
            Step::Print(text) => println!("{}", text.trim_end()),
            Step::Quit => break,
            Step::Cancelled => {
                println!("Cancelled.");
                break;
            }
        }
    }

    session.teardown();
    Ok(())
}

/// Apply one form command to the form and session.
pub async fn execute<P: Predictor>(
    command: FormCommand,
    form: &mut FormState,
    session: &mut Session<P>,
    interrupt: &mut Interrupt,
    color: bool,
) -> Step {
    match command {
        FormCommand::Empty => Step::Print(String::new()),
        FormCommand::Help => Step::Print(HELP.to_string()),
        FormCommand::Show => Step::Print(render::form_lines(form, color)),
        FormCommand::Reset => {
            form.reset();
            session.on_form_change(form.submit());
            Step::Print(render::form_lines(form, color))
        }
        FormCommand::Set { field, value } => match form.update(field, &value) {
            Ok(update) => {
                let (field, shown) = (update.field, update.record.get(update.field));
                session.on_form_change(update.record);
                if update.coerced {
                    Step::Print(format!("{field} = {shown} {}", render::COERCED_MARKER))
                } else {
                    Step::Print(format!("{field} = {shown}"))
                }
            }
            Err(error) => Step::Print(error.to_string()),
        },
        FormCommand::Submit => submit(form, session, interrupt, color).await,
        FormCommand::Quit => Step::Quit,
    }
}

async fn submit<P: Predictor>(
    form: &FormState,
    session: &mut Session<P>,
    interrupt: &mut Interrupt,
    color: bool,
) -> Step {
    let record = form.submit();
    if let Err(error) = record.validate() {
        return Step::Print(error.to_string());
    }
    session.on_form_change(record);

    let ticket = match session.begin_submit() {
        Ok(ticket) => ticket,
        Err(error) => return Step::Print(error.to_string()),
    };

    let spinner = Progress::spinner(render::LOADING_MESSAGE);
    if !spinner.is_visible() {
        println!("{}", render::LOADING_MESSAGE);
    }
    let result = {
        let predict = session.predictor().predict(session.record());
        tokio::select! {
            result = predict => Some(result),
            () = interrupt.wait() => None,
        }
    };
    spinner.finish_clear();

    match result {
        Some(result) => {
            session.complete(ticket, result);
            Step::Print(render::view(session.view(), form, color))
        }
        None => {
            session.teardown();
            Step::Cancelled
        }
    }
}
