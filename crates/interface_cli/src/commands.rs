//! Command handlers
//!
//! Each subcommand drives the `PolicyManager` the way a view would: load,
//! edit a draft, submit, then render the resulting state.

use std::io::Write;
use std::sync::Arc;

use anyhow::anyhow;
use tracing::info;

use core_kernel::{AdapterHealth, Currency, PolicyId};
use domain_policy::manager::FETCH_FAILED;
use domain_policy::premium::parse_or_zero;
use domain_policy::{
    ConfirmationGate, EditorSignal, FixedAnswer, PolicyDraft, PolicyManager, PolicyPort,
    PremiumQuote, RecordSource, RemoveOutcome,
};
use infra_rest::RestPolicyAdapter;

use crate::cli::{Command, DeleteArgs, DraftArgs, EditArgs, ListArgs, OutputFormat, QuoteArgs};
use crate::config::PortalConfig;
use crate::error::{CliError, CliResult};
use crate::render;

/// The portal front end bound to one policy port
pub struct Portal {
    port: Arc<dyn PolicyPort>,
    manager: PolicyManager,
    currency: Currency,
    output: OutputFormat,
}

impl Portal {
    /// Creates a portal over any port implementation
    pub fn new(port: Arc<dyn PolicyPort>, currency: Currency, output: OutputFormat) -> Self {
        Self {
            manager: PolicyManager::new(port.clone()),
            port,
            currency,
            output,
        }
    }

    /// Creates a portal talking to the configured backend
    pub fn from_config(config: &PortalConfig, output: OutputFormat) -> CliResult<Self> {
        let adapter = RestPolicyAdapter::new(config.rest_config()?)?;
        info!(url = %adapter.base_url(), "Using policy backend");
        Ok(Self::new(Arc::new(adapter), config.list_currency()?, output))
    }

    pub fn manager(&self) -> &PolicyManager {
        &self.manager
    }

    /// Runs one subcommand, writing its view to `out`
    pub async fn run<W: Write>(
        &self,
        command: Command,
        gate: &dyn ConfirmationGate,
        out: &mut W,
    ) -> CliResult<()> {
        let result = match command {
            Command::List(args) => self.list(args, out).await,
            Command::Create(args) => self.create(args, out).await,
            Command::Edit(args) => self.edit(args, out).await,
            Command::Delete(args) => self.delete(args, gate, out).await,
            Command::Quote(args) => self.quote(args, out),
            Command::Health => self.health(out).await,
        };
        self.manager.shutdown();
        result
    }

    async fn list<W: Write>(&self, args: ListArgs, out: &mut W) -> CliResult<()> {
        self.manager.start().await;
        let state = self.manager.snapshot();
        let records = self.manager.visible(&args.search);
        render::render_list(out, &state, &records, self.currency, self.output)
    }

    async fn create<W: Write>(&self, args: DraftArgs, out: &mut W) -> CliResult<()> {
        let mut draft = PolicyDraft::for_create()?;
        apply_fields(&mut draft, args);
        self.submit(draft, out).await
    }

    async fn edit<W: Write>(&self, args: EditArgs, out: &mut W) -> CliResult<()> {
        self.manager.start().await;
        let state = self.manager.snapshot();
        if state.source() == RecordSource::Demonstration {
            return Err(CliError::failure(anyhow!(FETCH_FAILED)));
        }

        let id = PolicyId::new(args.id);
        let record = state
            .records()
            .iter()
            .find(|record| record.id.as_ref() == Some(&id))
            .ok_or_else(|| CliError::NotFound(id.to_string()))?;

        let mut draft = PolicyDraft::for_edit(record)?;
        apply_fields(&mut draft, args.fields);
        self.submit(draft, out).await
    }

    async fn submit<W: Write>(&self, draft: PolicyDraft, out: &mut W) -> CliResult<()> {
        render::render_draft(out, &draft)?;
        draft.validate()?;

        match self.manager.save(&draft).await {
            EditorSignal::Close => {
                writeln!(out, "Policy saved.")?;
                Ok(())
            }
            EditorSignal::KeepOpen => Err(self.last_error()),
        }
    }

    async fn delete<W: Write>(
        &self,
        args: DeleteArgs,
        gate: &dyn ConfirmationGate,
        out: &mut W,
    ) -> CliResult<()> {
        let id = PolicyId::new(args.id);
        let outcome = if args.yes {
            self.manager.remove(&id, &FixedAnswer(true)).await
        } else {
            self.manager.remove(&id, gate).await
        };

        match outcome {
            RemoveOutcome::Cancelled => writeln!(out, "Delete cancelled.")?,
            RemoveOutcome::Deleted => writeln!(out, "Policy deleted.")?,
            RemoveOutcome::Failed => return Err(self.last_error()),
        }
        Ok(())
    }

    fn quote<W: Write>(&self, args: QuoteArgs, out: &mut W) -> CliResult<()> {
        let quote = PremiumQuote::new(parse_or_zero(&args.tsi), parse_or_zero(&args.rate), args.currency)?;
        render::render_quote(out, &quote, self.output)
    }

    async fn health<W: Write>(&self, out: &mut W) -> CliResult<()> {
        let result = self.port.health_check().await;
        render::render_health(out, &result, self.output)?;
        match result.status {
            AdapterHealth::Healthy => Ok(()),
            AdapterHealth::Unhealthy => Err(CliError::failure(anyhow!("backend is unreachable"))),
        }
    }

    fn last_error(&self) -> CliError {
        let message = self
            .manager
            .snapshot()
            .error()
            .unwrap_or("operation failed")
            .to_string();
        CliError::failure(anyhow!(message))
    }
}

fn apply_fields(draft: &mut PolicyDraft, fields: DraftArgs) {
    if let Some(name) = fields.beneficiary {
        draft.beneficiary_name = name;
    }
    if let Some(brand) = fields.brand {
        draft.car_brand = brand;
    }
    if let Some(car_type) = fields.car_type {
        draft.car_type = car_type;
    }
    if let Some(tsi) = fields.tsi {
        draft.set_tsi(tsi);
    }
    if let Some(rate) = fields.rate {
        draft.set_premium_rate(rate);
    }
    if let Some(start) = fields.start {
        draft.start_date = start;
    }
    if let Some(end) = fields.end {
        draft.end_date = end;
    }
}
