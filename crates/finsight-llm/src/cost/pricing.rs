//! Model Pricing - static price tables (USD per 1K tokens)

use crate::config::ProviderKind;
use serde::Serialize;

/// Pricing information for a model (per 1K tokens)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelPricing {
    /// Cost per 1K input tokens (USD)
    pub input_per_1k: f64,
    /// Cost per 1K output tokens (USD)
    pub output_per_1k: f64,
}

impl ModelPricing {
    /// Free model
    pub const FREE: Self = Self::new(0.0, 0.0);

    /// Create a pricing row
    #[must_use]
    pub const fn new(input_per_1k: f64, output_per_1k: f64) -> Self {
        Self {
            input_per_1k,
            output_per_1k,
        }
    }

    /// Calculate cost for given token counts
    #[must_use]
    pub fn calculate_cost(&self, prompt_tokens: u32, completion_tokens: u32) -> f64 {
        let input_cost = (f64::from(prompt_tokens) / 1_000.0) * self.input_per_1k;
        let output_cost = (f64::from(completion_tokens) / 1_000.0) * self.output_per_1k;
        input_cost + output_cost
    }
}

/// Immutable price table for one vendor
#[derive(Debug)]
pub struct PriceTable {
    /// Vendor
    pub provider: ProviderKind,
    /// Row used for models missing from `entries`
    pub default_model: &'static str,
    /// (model id, pricing) rows
    pub entries: &'static [(&'static str, ModelPricing)],
}

impl PriceTable {
    /// Pricing for `model`, falling back to the default row
    #[must_use]
    pub fn lookup(&self, model: &str) -> ModelPricing {
        self.find(model)
            .or_else(|| self.find(self.default_model))
            .unwrap_or(ModelPricing::FREE)
    }

    /// Whether `model` has its own row
    #[must_use]
    pub fn contains(&self, model: &str) -> bool {
        self.find(model).is_some()
    }

    fn find(&self, model: &str) -> Option<ModelPricing> {
        self.entries
            .iter()
            .find(|(id, _)| *id == model)
            .map(|(_, pricing)| *pricing)
    }
}

// ============================================================================
// OpenAI (2024-2026)
// ============================================================================

static OPENAI: PriceTable = PriceTable {
    provider: ProviderKind::OpenAi,
    default_model: "gpt-4o",
    entries: &[
        ("gpt-4o", ModelPricing::new(0.0025, 0.01)),
        ("gpt-4o-mini", ModelPricing::new(0.00015, 0.0006)),
        ("gpt-4-turbo", ModelPricing::new(0.01, 0.03)),
        ("gpt-4", ModelPricing::new(0.03, 0.06)),
        ("gpt-3.5-turbo", ModelPricing::new(0.0005, 0.0015)),
        // Reasoning models
        ("o1-preview", ModelPricing::new(0.015, 0.06)),
        ("o1-mini", ModelPricing::new(0.003, 0.012)),
    ],
};

// ============================================================================
// Anthropic Claude 3.x
// ============================================================================

static ANTHROPIC: PriceTable = PriceTable {
    provider: ProviderKind::Anthropic,
    default_model: "claude-3-5-sonnet-20241022",
    entries: &[
        ("claude-3-5-sonnet-20241022", ModelPricing::new(0.003, 0.015)),
        ("claude-3-opus-20240229", ModelPricing::new(0.015, 0.075)),
        ("claude-3-sonnet-20240229", ModelPricing::new(0.003, 0.015)),
        ("claude-3-haiku-20240307", ModelPricing::new(0.00025, 0.00125)),
    ],
};

// ============================================================================
// Google Gemini
// ============================================================================

static GOOGLE: PriceTable = PriceTable {
    provider: ProviderKind::Google,
    default_model: "gemini-1.5-flash",
    entries: &[
        // Experimental builds are free
        ("gemini-2.0-flash-exp", ModelPricing::FREE),
        ("gemini-1.5-pro", ModelPricing::new(0.00125, 0.005)),
        ("gemini-1.5-flash", ModelPricing::new(0.000075, 0.0003)),
        ("gemini-1.0-pro", ModelPricing::new(0.0005, 0.0015)),
    ],
};

// ============================================================================
// DeepSeek ($0.14 / $0.28 per 1M for V3)
// ============================================================================

static DEEPSEEK: PriceTable = PriceTable {
    provider: ProviderKind::DeepSeek,
    default_model: "deepseek-chat",
    entries: &[
        ("deepseek-chat", ModelPricing::new(0.00014, 0.00028)),
        ("deepseek-reasoner", ModelPricing::new(0.00055, 0.00219)),
    ],
};

// ============================================================================
// Local models via Ollama (FREE)
// ============================================================================

static OLLAMA: PriceTable = PriceTable {
    provider: ProviderKind::Ollama,
    default_model: "",
    entries: &[],
};

/// Price table for a vendor
#[must_use]
pub fn price_table(provider: ProviderKind) -> &'static PriceTable {
    match provider {
        ProviderKind::OpenAi => &OPENAI,
        ProviderKind::Anthropic => &ANTHROPIC,
        ProviderKind::Google => &GOOGLE,
        ProviderKind::Ollama => &OLLAMA,
        ProviderKind::DeepSeek => &DEEPSEEK,
    }
}

/// Estimated cost in USD of one call
#[must_use]
pub fn estimate_cost(
    provider: ProviderKind,
    model: &str,
    prompt_tokens: u32,
    completion_tokens: u32,
) -> f64 {
    price_table(provider)
        .lookup(model)
        .calculate_cost(prompt_tokens, completion_tokens)
}
