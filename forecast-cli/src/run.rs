//! Sequential run: fetch, sweep, project, reconcile, delete, create.

use anyhow::{Context, Result};
use chrono::Local;
use forecast_core::{
    ProjectionWindow, SkipReason, existing_forecasts, project, reconcile, sweep,
};
use forecast_ynab::{RecordRef, WritePacer, YnabClient, with_retry};

use crate::config::{Config, WRITE_GAP, retry_policy};

pub async fn run(config: &Config, dry_run: bool) -> Result<()> {
    let client = YnabClient::new(config.token.clone());
    let policy = retry_policy();

    println!("Fetching data from budget {}...", config.budget_id);
    let history = with_retry(policy, || client.transactions(&config.budget_id))
        .await
        .context("fetching transactions")?;
    let scheduled = with_retry(policy, || client.scheduled_transactions(&config.budget_id))
        .await
        .context("fetching scheduled transactions")?;
    println!(
        "Found {} transactions, {} scheduled entries",
        history.len(),
        scheduled.len()
    );

    let window = ProjectionWindow::from_today(Local::now().date_naive(), config.horizon_months);
    let mut pacer = WritePacer::new(WRITE_GAP, policy);

    // Phase 1: clear stale forecast transactions out of the register.
    println!("\nCleaning up stale forecasts in the register...");
    let mut deleted_history = 0usize;
    for record in sweep(&history, window.today) {
        if dry_run {
            println!(
                "  [dry-run] would delete past txn: {} | {}",
                record.date, record.payee_name
            );
            continue;
        }
        let target = RecordRef::Transaction(record.id.clone());
        match pacer
            .dispatch(|| client.delete_record(&config.budget_id, &target))
            .await
        {
            Ok(()) => {
                println!("  Deleted past txn: {} | {}", record.date, record.payee_name);
                deleted_history += 1;
            }
            Err(err) => eprintln!("  Failed to delete transaction {}: {err}", record.id),
        }
    }

    // Phase 2: project masters to the horizon and diff against what exists.
    println!("\nProjecting forecasts until {}...", window.horizon);
    let projection = project(&scheduled, window.horizon);
    for skip in &projection.skipped {
        match skip.reason {
            SkipReason::SplitTemplate => println!(
                "  Skipping split entry: {} | {}",
                skip.next_date, skip.payee_name
            ),
            SkipReason::BlankMemo => println!(
                "  Skipping entry without memo: {} | {}",
                skip.next_date, skip.payee_name
            ),
        }
    }
    let skipped_splits = projection
        .skipped
        .iter()
        .filter(|s| s.reason == SkipReason::SplitTemplate)
        .count();

    let plan = reconcile(projection.candidates, existing_forecasts(&scheduled));
    println!(
        "  {} forecasts to create, {} to delete",
        plan.to_create.len(),
        plan.to_delete.len()
    );

    // Phase 3: delete forecasts no candidate matches anymore.
    let mut deleted_forecast = 0usize;
    for entry in &plan.to_delete {
        if dry_run {
            println!(
                "  [dry-run] would delete forecast: {} | {}",
                entry.next_date, entry.payee_name
            );
            continue;
        }
        let target = RecordRef::Scheduled(entry.id.clone());
        match pacer
            .dispatch(|| client.delete_record(&config.budget_id, &target))
            .await
        {
            Ok(()) => {
                println!(
                    "  Deleted forecast: {} | {}",
                    entry.next_date, entry.payee_name
                );
                deleted_forecast += 1;
            }
            Err(err) => eprintln!("  Failed to delete scheduled {}: {err}", entry.id),
        }
    }

    // Phase 4: create the missing forecasts. A rate limit that survives the
    // retries abandons the rest; reconciliation is idempotent, so the next
    // run picks them up.
    let mut created = 0usize;
    for record in &plan.to_create {
        if dry_run {
            println!(
                "  [dry-run] would create forecast: {} | {}",
                record.date, record.payee_name
            );
            continue;
        }
        match pacer
            .dispatch(|| client.create_scheduled(&config.budget_id, record))
            .await
        {
            Ok(()) => {
                println!("  Created forecast: {} | {}", record.date, record.payee_name);
                created += 1;
            }
            Err(err) if err.is_rate_limit() => {
                eprintln!("  Rate limited; abandoning remaining creates. Re-run to finish.");
                break;
            }
            Err(err) => eprintln!("  Failed to create forecast for {}: {err}", record.date),
        }
    }

    println!("\nSummary:");
    println!("  Deleted history (past):  {deleted_history}");
    println!("  Deleted forecasts:       {deleted_forecast}");
    println!("  Created forecasts:       {created}");
    println!("  Skipped splits:          {skipped_splits}");
    Ok(())
}
