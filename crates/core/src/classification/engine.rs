//! Rule engine - ordered, first-match-wins classification

use parcelsort_domain::{Category, ClassifierConfig, Measurement};

use super::rules::{
    ClassificationRule, ExpressRule, FragileRule, RejectRule, SpecialBulkyRule, SpecialHeavyRule,
};

/// Ordered collection of rules
///
/// Registration order is priority order. The engine is immutable while it
/// classifies, so a built engine can be shared behind an `Arc` without
/// further locking.
#[derive(Debug, Default)]
pub struct RuleEngine {
    rules: Vec<Box<dyn ClassificationRule>>,
}

impl RuleEngine {
    /// Label returned when no rule applies
    pub const DEFAULT_CATEGORY: Category = Category::STANDARD;

    /// Create an engine without rules (classifies everything as STANDARD)
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Default production chain: Reject → Special-heavy → Special-bulky
    ///
    /// `RejectRule` goes first so a package that is both heavy and bulky is
    /// never labelled SPECIAL by one of the single-condition rules.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(RejectRule::new())
            .with_rule(SpecialHeavyRule::new())
            .with_rule(SpecialBulkyRule::new())
    }

    /// Standard chain built from configured thresholds, plus opt-in rules
    ///
    /// Opt-in rules are appended after the standard chain: FRAGILE before
    /// EXPRESS.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let thresholds = &config.thresholds;
        let mut engine = Self::new()
            .with_rule(RejectRule::from_thresholds(thresholds))
            .with_rule(SpecialHeavyRule::from_thresholds(thresholds))
            .with_rule(SpecialBulkyRule::from_thresholds(thresholds));

        if config.enable_fragile {
            engine.add_rule(FragileRule::from_thresholds(thresholds));
        }
        if config.enable_express {
            engine.add_rule(ExpressRule::from_thresholds(thresholds));
        }
        engine
    }

    /// Append a rule, consuming and returning the engine
    #[must_use]
    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: ClassificationRule + 'static,
    {
        self.add_rule(rule);
        self
    }

    /// Append a rule in place; returns `&mut Self` for chaining
    pub fn add_rule<R>(&mut self, rule: R) -> &mut Self
    where
        R: ClassificationRule + 'static,
    {
        self.rules.push(Box::new(rule));
        self
    }

    /// Append an already boxed rule (for rules chosen at runtime)
    pub fn add_boxed_rule(&mut self, rule: Box<dyn ClassificationRule>) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Classify a measurement
    ///
    /// Returns the label of the first rule whose predicate holds, or
    /// [`Self::DEFAULT_CATEGORY`].
    pub fn classify(&self, measurement: &Measurement) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.applies(measurement))
            .map_or(Self::DEFAULT_CATEGORY, |rule| rule.classify())
    }

    /// Convenience wrapper taking the four raw values
    pub fn classify_dimensions(&self, width: f64, height: f64, length: f64, mass: f64) -> Category {
        self.classify(&Measurement::new(width, height, length, mass))
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered (every call yields the default)
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in priority order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }
}
