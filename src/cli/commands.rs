use std::io::{self, IsTerminal};

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{Animator, TraversalPlayer};
use crate::cli::args::{Cli, Commands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{Settings, MAX_DELAY_MS};
use crate::domain::{
    evaluate, parenthesized, standard_expression, traverse, TraversalKind, EXPRESSION_TITLE,
};
use crate::infrastructure::{KeyControls, TerminalSession, TerminalSink, TextRenderer};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = effective_settings(cli)?;
    if !settings.color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Some(Commands::Tree) => _tree(&settings),
        Some(Commands::Traverse { kind, no_animate }) => {
            _traverse(&settings, (*kind).into(), *no_animate)
        }
        Some(Commands::All) => _all(&settings),
        Some(Commands::Eval) => _eval(),
        Some(Commands::Play) => _play(&settings),
        Some(Commands::Config) => _config(&settings),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => {
            Cli::command()
                .print_help()
                .map_err(|e| crate::infrastructure::InfraError::io("print help", e))?;
            Ok(())
        }
    }
}

/// Config layers plus command line flags.
pub fn effective_settings(cli: &Cli) -> CliResult<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(delay) = cli.delay {
        if delay > MAX_DELAY_MS {
            return Err(CliError::InvalidArgs(format!(
                "delay must be at most {} ms, got {}",
                MAX_DELAY_MS, delay
            )));
        }
        settings.delay_ms = delay;
    }
    if cli.no_color {
        settings.color = false;
    }
    debug!("effective settings: {:?}", settings);
    Ok(settings)
}

fn new_player(settings: &Settings) -> CliResult<TraversalPlayer> {
    Ok(TraversalPlayer::new(standard_expression()?).with_separator(settings.separator.clone()))
}

#[instrument(skip(settings))]
fn _tree(settings: &Settings) -> CliResult<()> {
    let tree = standard_expression()?;
    output::header(EXPRESSION_TITLE);
    output::info(&TextRenderer::new(settings.color).render_tree(&tree));
    output::detail(&format!("{} nodes, depth {}", tree.len(), tree.depth()));
    Ok(())
}

#[instrument(skip(settings))]
fn _traverse(settings: &Settings, kind: TraversalKind, no_animate: bool) -> CliResult<()> {
    let mut player = new_player(settings)?;
    let renderer = TextRenderer::new(settings.color);

    if no_animate || !io::stdout().is_terminal() {
        player.start(kind);
        while player.advance().is_some() {}
        output::info(&renderer.render(&player.frame()));
        return Ok(());
    }

    let mut sink = TerminalSink::new(renderer);
    let outcome = Animator::new(settings.delay()).play(&mut player, kind, &mut sink)?;
    debug!("traversal outcome: {:?}", outcome);
    Ok(())
}

#[instrument(skip(settings))]
fn _all(settings: &Settings) -> CliResult<()> {
    let tree = standard_expression()?;
    output::header(EXPRESSION_TITLE);
    for kind in TraversalKind::ALL {
        let traversal = traverse(&tree, kind);
        output::action(
            &format!("{} ({})", kind, kind.notation_name()),
            &format!(
                "{}  [{} steps]",
                traversal.notation_with(&settings.separator),
                traversal.len()
            ),
        );
    }
    Ok(())
}

#[instrument]
fn _eval() -> CliResult<()> {
    let tree = standard_expression()?;
    output::action("Expression", &parenthesized(&tree));
    let value = evaluate(&tree)?;
    output::action("Value", &value);
    Ok(())
}

#[instrument(skip(settings))]
fn _play(settings: &Settings) -> CliResult<()> {
    let mut player = new_player(settings)?;
    let session = TerminalSession::enter()?;
    let renderer = TextRenderer::new(settings.color).with_controls(true);
    let mut sink = TerminalSink::new(renderer).raw(true);
    let result = Animator::new(settings.delay()).run(&mut player, &mut sink, &mut KeyControls);
    drop(session);
    result?;
    Ok(())
}

#[instrument(skip(settings))]
fn _config(settings: &Settings) -> CliResult<()> {
    output::info(&settings.to_toml()?);
    Ok(())
}
