//! Per-process CLI state: forms, scenarios, configuration and storage handles.

use std::path::{Path, PathBuf};

use evplan_config::{Config, ConfigManager};
use evplan_core::{
    storage::PreferencesStore, BudgetEngine, ExpenseService, PlanningState, PricingTable,
    PricingTables, ScenarioBook,
};
use evplan_domain::{BudgetResult, CustomExpense, EventParameters};
use evplan_storage_json::JsonPreferencesStore;
use strsim::levenshtein;
use tracing::{info, warn};

use super::commands::{self, CommandDefinition, CommandRegistry};
use super::core::{CliMode, CommandError, LoopControl};
use super::output;
use crate::{currency::CurrencyFormatter, errors::AppError, utils};

pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    pub(crate) registry: CommandRegistry,
    pub(crate) planning: PlanningState,
    pub(crate) expenses: Vec<CustomExpense>,
    pub(crate) scenarios: ScenarioBook,
    pub(crate) config: Config,
    pub(crate) config_manager: ConfigManager,
    pub(crate) store: JsonPreferencesStore,
    pub(crate) base_dir: PathBuf,
    pub(crate) pricing: PricingTables,
    pub(crate) currency: CurrencyFormatter,
}

impl ShellContext {
    /// Opens the application directory (`$EVPLAN_HOME` or `~/.evplan`).
    pub fn new(mode: CliMode) -> Result<Self, AppError> {
        Self::with_base_dir(mode, &utils::app_data_dir())
    }

    pub fn with_base_dir(mode: CliMode, base: &Path) -> Result<Self, AppError> {
        let config_manager = ConfigManager::with_base_dir(base)?;
        let config = config_manager.load()?;
        let pricing = utils::load_pricing(&config)?;
        let store = JsonPreferencesStore::new(config.resolve_data_dir(base))?;
        if !config.ui_color_enabled {
            output::set_color_enabled(false);
        }

        let mut planning = PlanningState::new();
        match store.latest_preferences() {
            Ok(Some(prefs)) => planning.apply_preferences(&prefs),
            Ok(None) => {}
            Err(err) => warn!(error = %err, "saved preferences could not be read"),
        }

        info!(base = %base.display(), ?mode, "session opened");
        Ok(Self {
            mode,
            running: true,
            registry: CommandRegistry::new(commands::all_definitions()),
            planning,
            expenses: Vec::new(),
            scenarios: ScenarioBook::new(config.max_scenarios),
            currency: CurrencyFormatter::from_config(&config),
            config,
            config_manager,
            store,
            base_dir: base.to_path_buf(),
            pricing,
        })
    }

    pub fn engine(&self) -> BudgetEngine<'_> {
        BudgetEngine::new(&self.pricing)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    pub fn prompt(&self) -> String {
        let city = self.planning.budget.city.trim();
        if city.is_empty() {
            "evplan> ".to_string()
        } else {
            format!("evplan [{city}]> ")
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.command(command).map(|definition| definition.handler) else {
            self.suggest_command(raw);
            return Err(CommandError::invalid(format!(
                "Unknown command `{raw}`. Type `help` to see available commands."
            )));
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    fn suggest_command(&self, input: &str) {
        let needle = input.to_ascii_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::hint(format!("Did you mean `{name}`?"));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            other => output::error(other),
        }
    }

    /// Prices the budget form, then adds the session's custom expenses and `extra`.
    /// Expenses are left out while the form is incomplete.
    ///
    /// Strict validation applies when configured or when `strict` is set.
    pub(crate) fn estimate(
        &self,
        strict: bool,
        extra: &[CustomExpense],
    ) -> Result<(EventParameters, BudgetResult), CommandError> {
        let params = self.planning.budget_parameters();
        let engine = self.engine();
        let result = if strict || self.config.strict_validation {
            engine.calculate_checked(&params)?
        } else {
            engine.calculate(&params)
        };
        if !params.is_complete() {
            return Ok((params, result));
        }
        let expenses: Vec<CustomExpense> =
            self.expenses.iter().chain(extra.iter()).cloned().collect();
        let result = ExpenseService::apply(&result, &expenses)?;
        Ok((params, result))
    }

    /// Warns about codes missing from the price lists, with a close match when one exists.
    pub(crate) fn warn_unknown_codes(&self, params: &EventParameters) {
        let mut checks: Vec<(PricingTable, &str, &str, &str)> = Vec::new();
        if let Some(city) = params.city_code() {
            checks.push((PricingTable::City, "city", city, "neutral pricing (x1.0)"));
        }
        if let Some(venue) = params.venue_code() {
            checks.push((PricingTable::Venue, "venue type", venue, "the fallback venue cost"));
        }
        if let Some(catering) = params.catering_code() {
            checks.push((PricingTable::Catering, "catering type", catering, "no catering cost"));
        }
        for service in &params.additional_services {
            checks.push((PricingTable::Service, "service", service.trim(), "no cost"));
        }

        for (table, label, code, fallback) in checks {
            if code.is_empty() || self.pricing.contains(table, code) {
                continue;
            }
            let mut message = format!("Unknown {label} `{code}`, using {fallback}.");
            if let Some(suggestion) = self.pricing.suggest(table, code) {
                message.push_str(&format!(" Did you mean `{suggestion}`?"));
            }
            output::warning(message);
        }
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Applies settings that affect the running session after a config change.
    pub(crate) fn refresh_from_config(&mut self) -> Result<(), CommandError> {
        self.pricing = utils::load_pricing(&self.config)?;
        let data_dir = self.config.resolve_data_dir(&self.base_dir);
        if data_dir.as_path() != self.store.root() {
            self.store = JsonPreferencesStore::new(data_dir)?;
        }
        output::set_color_enabled(self.config.ui_color_enabled);
        self.currency = CurrencyFormatter::from_config(&self.config);
        if self.scenarios.is_empty() {
            self.scenarios = ScenarioBook::new(self.config.max_scenarios);
        } else if self.scenarios.limit() != self.config.max_scenarios {
            output::info("The new scenario limit applies once the current scenarios are cleared.");
        }
        Ok(())
    }
}
