//! Headless commands
//!
//! Each command drives a `SchemeListController` through the same transitions
//! the web UI uses: load the list, select a record, edit the buffer, commit.

use scheme_admin_core::{
    NotificationLevel, Outcome, Route, SchemeApi, SchemeField, SchemeListController, SchemeRecord,
};
use std::io::Write;
use thiserror::Error;
use tracing::info;

use crate::cli::Command;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Session expired or missing; log in again and pass the session cookie")]
    SessionExpired,

    #[error("Scheme not found: {0}")]
    NotFound(String),

    #[error("Invalid assignment '{0}', expected FIELD=VALUE")]
    InvalidAssignment(String),

    #[error("{0}")]
    Failed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Run a headless command; `Serve` is handled by the caller
pub async fn run<A: SchemeApi>(
    command: Command,
    controller: &mut SchemeListController<A>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    match command {
        Command::Serve => Ok(()),
        Command::List => list(controller, out).await,
        Command::Update { id, assignments } => update(controller, &id, &assignments, out).await,
        Command::Delete { id } => delete(controller, &id, out).await,
    }
}

async fn list<A: SchemeApi>(
    controller: &mut SchemeListController<A>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    load(controller).await?;

    writeln!(
        out,
        "{:<7} {:<26} {:<32} {:<24} {:<16} {:<14} {:<14}",
        "Sr. No.", "Id", "Scheme Name", "Ministry", "Place", "Granted", "Spent"
    )?;
    for scheme in controller.state().schemes() {
        writeln!(
            out,
            "{:<7} {:<26} {:<32} {:<24} {:<16} {:<14} {:<14}",
            scheme.field(SchemeField::SerialNumber),
            scheme.id,
            scheme.name,
            scheme.ministry,
            scheme.place,
            scheme.field(SchemeField::MoneyGranted),
            scheme.field(SchemeField::MoneySpent),
        )?;
    }
    Ok(())
}

async fn update<A: SchemeApi>(
    controller: &mut SchemeListController<A>,
    id: &str,
    assignments: &[String],
    out: &mut impl Write,
) -> Result<(), CommandError> {
    // Every assignment is parsed before any request goes out
    let assignments = assignments
        .iter()
        .map(|a| parse_assignment(a))
        .collect::<Result<Vec<_>, _>>()?;

    load(controller).await?;
    let record = find(controller, id)?;
    controller.select_for_edit(record);
    for (field, value) in assignments {
        controller
            .set_field(field, value)
            .map_err(|e| CommandError::Failed(e.to_string()))?;
    }

    let outcome = controller.commit_edit().await;
    report(outcome, out)
}

async fn delete<A: SchemeApi>(
    controller: &mut SchemeListController<A>,
    id: &str,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    load(controller).await?;
    let record = find(controller, id)?;
    controller.select_for_delete(record);

    let outcome = controller.commit_delete().await;
    report(outcome, out)
}

async fn load<A: SchemeApi>(controller: &mut SchemeListController<A>) -> Result<(), CommandError> {
    let outcome = controller.load_all().await;
    if outcome.navigate == Some(Route::Login) {
        return Err(CommandError::SessionExpired);
    }
    if let Some(error) = controller.state().error() {
        return Err(CommandError::Failed(error.to_string()));
    }
    info!(count = controller.state().schemes().len(), "schemes loaded");
    Ok(())
}

fn find<A: SchemeApi>(
    controller: &SchemeListController<A>,
    id: &str,
) -> Result<SchemeRecord, CommandError> {
    controller
        .state()
        .schemes()
        .iter()
        .find(|s| s.id == id)
        .cloned()
        .ok_or_else(|| CommandError::NotFound(id.to_string()))
}

fn report(outcome: Outcome, out: &mut impl Write) -> Result<(), CommandError> {
    if outcome.navigate == Some(Route::Login) {
        return Err(CommandError::SessionExpired);
    }
    match outcome.notification {
        Some(n) if n.level == NotificationLevel::Error => Err(CommandError::Failed(n.message)),
        Some(n) => {
            writeln!(out, "{}", n.message)?;
            Ok(())
        }
        None => Err(CommandError::Failed("nothing was sent".to_string())),
    }
}

fn parse_assignment(raw: &str) -> Result<(SchemeField, String), CommandError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| CommandError::InvalidAssignment(raw.to_string()))?;
    let field = name
        .trim()
        .parse::<SchemeField>()
        .map_err(|_| CommandError::InvalidAssignment(raw.to_string()))?;
    Ok((field, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("schemename=PM Awas").unwrap(),
            (SchemeField::Name, "PM Awas".to_string())
        );
        assert_eq!(
            parse_assignment("desc=a=b").unwrap(),
            (SchemeField::Description, "a=b".to_string())
        );
        assert_eq!(
            parse_assignment("place=").unwrap(),
            (SchemeField::Place, String::new())
        );
        assert!(matches!(
            parse_assignment("schemename"),
            Err(CommandError::InvalidAssignment(_))
        ));
        assert!(matches!(
            parse_assignment("budget=1"),
            Err(CommandError::InvalidAssignment(_))
        ));
    }
}
