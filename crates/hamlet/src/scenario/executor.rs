//! Scenario execution engine

use anyhow::{Context, Result};
use hamlet_core::entity::{Direction, InputEdge};
use hamlet_core::render::SceneRenderer;
use hamlet_core::world::Session;
use web_time::Instant;

use super::actions::ScenarioAction;
use super::definition::ScenarioDefinition;
use super::results::ExecutionReport;

/// Configuration for scenario executor
#[derive(Debug, Clone, Default)]
pub struct ScenarioExecutorConfig {
    /// Log every action as it runs
    pub verbose: bool,
}

/// Executes scenario actions against a session
pub struct ScenarioExecutor {
    config: ScenarioExecutorConfig,

    /// Ticks run by this execution
    tick_count: u64,

    /// Action execution log
    log: Vec<String>,

    /// Summed and slowest tick time (milliseconds)
    tick_time_total_ms: f64,
    tick_time_peak_ms: f64,
}

impl ScenarioExecutor {
    /// Create new executor with default config
    pub fn new() -> Self {
        Self::with_config(ScenarioExecutorConfig::default())
    }

    /// Create new executor with custom config
    pub fn with_config(config: ScenarioExecutorConfig) -> Self {
        Self {
            config,
            tick_count: 0,
            log: Vec::new(),
            tick_time_total_ms: 0.0,
            tick_time_peak_ms: 0.0,
        }
    }

    /// Execute a complete scenario
    ///
    /// Fails only when an action cannot run; failed verifications are
    /// reported in the returned report.
    pub fn execute_scenario<R: SceneRenderer + ?Sized>(
        &mut self,
        scenario: &ScenarioDefinition,
        session: &mut Session,
        renderer: &mut R,
    ) -> Result<ExecutionReport> {
        let start_time = Instant::now();
        let mut report = ExecutionReport::new(scenario.name.clone());

        self.log.clear();
        self.tick_count = 0;
        self.tick_time_total_ms = 0.0;
        self.tick_time_peak_ms = 0.0;

        self.log(&format!("Starting scenario: {}", scenario.name));
        if !scenario.description.is_empty() {
            self.log(&format!("Description: {}", scenario.description));
        }

        session.build_scene(renderer);

        let action_start = Instant::now();
        let phases = [("Setup", &scenario.setup), ("Action", &scenario.actions)];
        for (phase, actions) in phases {
            if actions.is_empty() {
                continue;
            }
            self.log(&format!("Running {} {} actions", actions.len(), phase.to_lowercase()));
            for (idx, action) in actions.iter().enumerate() {
                if let Err(e) = self.execute_action(action, session, renderer) {
                    let msg = format!("{} {} failed: {:#}", phase, idx, e);
                    self.log(&msg);
                    report.log = self.log.clone();
                    return Err(anyhow::anyhow!(msg));
                }
            }
        }
        report.performance.action_duration_ms = action_start.elapsed().as_secs_f64() * 1000.0;
        report.actions_executed = scenario.setup.len() + scenario.actions.len();

        // Run verifications
        let verify_start = Instant::now();
        if !scenario.verify.is_empty() {
            self.log(&format!("Running {} verifications", scenario.verify.len()));
            for condition in &scenario.verify {
                let result = condition.evaluate(session);
                self.log(&format!(
                    "  {} {}",
                    if result.passed { "✓" } else { "✗" },
                    result.message
                ));

                if !result.passed {
                    report.verification_failures.push(result);
                }
            }
        }
        report.performance.verification_duration_ms =
            verify_start.elapsed().as_secs_f64() * 1000.0;

        // Finalize report
        report.ticks_executed = self.tick_count;
        report.final_position = session.character().position.to_array();
        report.passed = report.success();
        report.performance.total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;

        if self.tick_count > 0 {
            report.performance.avg_tick_time_ms =
                self.tick_time_total_ms / self.tick_count as f64;
            report.performance.peak_tick_time_ms = self.tick_time_peak_ms;
        }

        self.log(&format!(
            "Scenario complete: {} ({} ticks, {:.1}ms)",
            if report.passed { "PASSED" } else { "FAILED" },
            self.tick_count,
            report.performance.total_duration_ms
        ));
        self.log(&format!("  Performance: {}", report.performance.summary()));
        report.log = self.log.clone();

        Ok(report)
    }

    /// Execute a single action
    fn execute_action<R: SceneRenderer + ?Sized>(
        &mut self,
        action: &ScenarioAction,
        session: &mut Session,
        renderer: &mut R,
    ) -> Result<()> {
        if self.config.verbose {
            self.log(&format!("[Tick {}] {:?}", self.tick_count, action));
        }

        match action {
            ScenarioAction::Press { direction } => {
                session.press(*direction);
                self.log(&format!("  Pressed {}", direction));
            }

            ScenarioAction::Release { direction } => {
                session.release(*direction);
                self.log(&format!("  Released {}", direction));
            }

            ScenarioAction::Edge { name } => {
                let edge: InputEdge = name
                    .parse()
                    .with_context(|| format!("Invalid edge in scenario: '{}'", name))?;
                session.apply_edge(edge);
                self.log(&format!("  Applied {}", edge));
            }

            ScenarioAction::ReleaseAll => {
                for direction in Direction::ALL {
                    session.release(direction);
                }
                self.log("  Released all directions");
            }

            ScenarioAction::WaitTicks { ticks } => {
                self.run_ticks(session, renderer, *ticks);
                self.log(&format!("  Waited {} ticks", ticks));
            }

            ScenarioAction::Log { message } => {
                self.log(&format!("  [USER] {}", message));
            }

            ScenarioAction::Sequence { actions } => {
                self.log(&format!("  Sequence: {} actions", actions.len()));
                for action in actions {
                    self.execute_action(action, session, renderer)?;
                }
            }
        }

        Ok(())
    }

    fn run_ticks<R: SceneRenderer + ?Sized>(
        &mut self,
        session: &mut Session,
        renderer: &mut R,
        ticks: u64,
    ) {
        for _ in 0..ticks {
            let tick_start = Instant::now();
            session.tick_and_present(renderer);
            let elapsed_ms = tick_start.elapsed().as_secs_f64() * 1000.0;
            self.tick_time_total_ms += elapsed_ms;
            self.tick_time_peak_ms = self.tick_time_peak_ms.max(elapsed_ms);
            self.tick_count += 1;
        }
    }

    fn log(&mut self, message: &str) {
        log::info!("{}", message);
        self.log.push(message.to_string());
    }
}

impl Default for ScenarioExecutor {
    fn default() -> Self {
        Self::new()
    }
}
