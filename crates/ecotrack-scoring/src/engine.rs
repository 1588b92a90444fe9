use chrono::Utc;
use ecotrack_core::config::{EcoConfig, FactorTables, ScoringConfig};
use ecotrack_core::errors::{ConfigError, EcoResult};
use ecotrack_core::models::{
    Factor, FactorImpact, FootprintReport, Grade, LifestyleInput, ReductionPlanItem, StressIndex,
};
use ecotrack_core::traits::{IFeatureScaler, IFootprintPredictor, IScoringEngine};
use ecotrack_observability::assessment_span;
use ecotrack_observability::tracing_setup::events;

use crate::normalizer::{self, ImpactProfile};
use crate::prediction::PredictionPipeline;
use crate::stress::{self, StressBreakdown};
use crate::{grade, insight, plan, ranker};

/// Scoring engine: stress index, grade, factor ranking, and reduction plan.
///
/// Holds validated, read-only tables. Stateless between calls and safe to
/// share across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    tables: FactorTables,
    config: ScoringConfig,
}

impl ScoringEngine {
    /// Create an engine with the built-in tables and scoring defaults.
    pub fn new() -> Self {
        Self {
            tables: FactorTables::default(),
            config: ScoringConfig::default(),
        }
    }

    /// Create with custom tables and config. Both are validated; an invalid
    /// table is rejected here rather than producing a partial plan later.
    pub fn with_tables(tables: FactorTables, config: ScoringConfig) -> EcoResult<Self> {
        if let Err(e) = tables.validate().and_then(|_| config.validate()) {
            events::config_rejected(&e.to_string());
            return Err(e.into());
        }
        Ok(Self { tables, config })
    }

    pub fn from_config(config: &EcoConfig) -> EcoResult<Self> {
        Self::with_tables(config.tables.clone(), config.scoring.clone())
    }

    pub fn tables(&self) -> &FactorTables {
        &self.tables
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Normalized ratios and monthly quantities for `input`.
    pub fn profile(&self, input: &LifestyleInput) -> ImpactProfile {
        normalizer::normalize(input, &self.tables, &self.config.conversion())
    }

    /// Stress index with each weighted term.
    pub fn breakdown(&self, input: &LifestyleInput) -> StressBreakdown {
        stress::compute_breakdown(&self.profile(input), &self.tables)
    }

    /// All six impacts, highest first.
    pub fn ranked_impacts(&self, input: &LifestyleInput) -> Vec<FactorImpact> {
        ranker::rank(&self.profile(input).impacts())
    }

    /// Reduction plan for the configured number of top factors.
    pub fn plan(&self, input: &LifestyleInput) -> EcoResult<Vec<ReductionPlanItem>> {
        self.plan_top(input, self.config.top_factors)
    }

    /// Reduction plan for the `n` highest-impact factors.
    pub fn plan_top(
        &self,
        input: &LifestyleInput,
        n: usize,
    ) -> EcoResult<Vec<ReductionPlanItem>> {
        let profile = self.profile(input);
        let top = ranker::top(&profile.impacts(), n);
        Ok(self.plan_for(&top, &profile)?)
    }

    /// Full assessment with a model prediction.
    pub fn assess_with_prediction<S, P>(
        &self,
        input: &LifestyleInput,
        pipeline: &PredictionPipeline<S, P>,
    ) -> EcoResult<FootprintReport>
    where
        S: IFeatureScaler,
        P: IFootprintPredictor,
    {
        let predicted = pipeline.predict(input)?;
        self.build_report(input, Some(predicted))
    }

    fn plan_for(
        &self,
        top: &[Factor],
        profile: &ImpactProfile,
    ) -> Result<Vec<ReductionPlanItem>, ConfigError> {
        let _span = ecotrack_observability::planning_span!(top.len()).entered();
        plan::generate(top, profile, &self.tables, &self.config.conversion())
    }

    fn build_report(
        &self,
        input: &LifestyleInput,
        predicted_kg_co2: Option<f64>,
    ) -> EcoResult<FootprintReport> {
        let span = assessment_span!(self.config.top_factors);
        let _guard = span.enter();

        let profile = self.profile(input);
        let stress_index = stress::compute(&profile, &self.tables);
        let grade = grade::classify_index(stress_index);
        let impacts = profile.impacts();
        let top_factors = ranker::top(&impacts, self.config.top_factors);
        let plan = self.plan_for(&top_factors, &profile)?;
        let primary = top_factors.first().copied();

        events::assessment_completed(
            stress_index.value(),
            grade.label(),
            primary.map(Factor::name).unwrap_or("none"),
        );

        Ok(FootprintReport {
            predicted_kg_co2,
            monthly_budget_kg: self.config.monthly_budget_kg,
            stress_index,
            stress_percent: stress_index.as_percent(),
            grade,
            journey_stage: grade.journey_stage(),
            impacts,
            total_estimated_saving_kg: plan::total_saving(&plan),
            key_insight: insight::key_insight(primary),
            top_factors,
            plan,
            generated_at: Utc::now(),
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IScoringEngine for ScoringEngine {
    fn stress_index(&self, input: &LifestyleInput) -> StressIndex {
        stress::compute(&self.profile(input), &self.tables)
    }

    fn grade(&self, stress: StressIndex) -> Grade {
        grade::classify_index(stress)
    }

    fn assess(&self, input: &LifestyleInput) -> EcoResult<FootprintReport> {
        self.build_report(input, None)
    }
}
