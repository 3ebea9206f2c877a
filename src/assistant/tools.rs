use serde_json::{Value, json};

pub const ZAKAT_RATE: f64 = 0.025;

const DEFAULT_TIP: &str = "Focus on consistency (Istiqamah) in your daily prayers and character.";

pub fn calculate_zakat(total_assets: f64) -> f64 {
    total_assets * ZAKAT_RATE
}

pub fn zakat_reply(total_assets: f64) -> String {
    format!(
        "Based on a total asset value of {}, your Zakat (2.5%) would be approximately {:.2}. \
         Please consult a local scholar for precise rulings regarding specific asset types like business stock or jewelry.",
        total_assets,
        calculate_zakat(total_assets)
    )
}

pub fn spiritual_tip(category: &str) -> &'static str {
    match category.trim().to_lowercase().as_str() {
        "spiritual" => {
            "Try to maintain constant Dhikr (remembrance of Allah) throughout your day. 'SubhanAllah' and 'Alhamdulillah' carry great weight."
        }
        "health" => {
            "The Prophet (PBUH) recommended filling the stomach with one-third food, one-third water, and leaving one-third for air."
        }
        "nutrition" => {
            "Dates and honey are prophetic superfoods mentioned in the Sunnah for their immense health benefits."
        }
        "productivity" => {
            "Try the 'Barakah' method: Start your work right after Fajr. The morning hours are blessed for this Ummah."
        }
        _ => DEFAULT_TIP,
    }
}

/// A function call the model asked us to run locally.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolCall {
    CalculateZakat { total_assets: f64 },
    SpiritualTips { category: String },
}

impl ToolCall {
    pub fn parse(name: &str, args: &Value) -> Option<Self> {
        match name {
            "calculateZakat" => {
                let raw = args.get("totalAssets")?;
                let total_assets = raw
                    .as_f64()
                    .or_else(|| raw.as_str().and_then(|s| s.trim().parse().ok()))?;
                Some(ToolCall::CalculateZakat { total_assets })
            }
            "getSpiritualTips" => {
                let category = args
                    .get("category")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Some(ToolCall::SpiritualTips { category })
            }
            _ => None,
        }
    }

    pub fn run(&self) -> String {
        match self {
            ToolCall::CalculateZakat { total_assets } => zakat_reply(*total_assets),
            ToolCall::SpiritualTips { category } => spiritual_tip(category).to_string(),
        }
    }

    pub fn dispatch(name: &str, args: &Value) -> Option<String> {
        Self::parse(name, args).map(|call| call.run())
    }
}

/// Function declarations advertised to the model.
pub fn declarations() -> Value {
    json!([{
        "functionDeclarations": [
            {
                "name": "calculateZakat",
                "description": "Calculates Zakat (2.5%) based on the total value of assets.",
                "parameters": {
                    "type": "OBJECT",
                    "properties": {
                        "totalAssets": {
                            "type": "NUMBER",
                            "description": "The total value of liquid assets (cash, gold, business stock) in local currency."
                        }
                    },
                    "required": ["totalAssets"]
                }
            },
            {
                "name": "getSpiritualTips",
                "description": "Provides spiritual or health tips based on Islamic principles.",
                "parameters": {
                    "type": "OBJECT",
                    "properties": {
                        "category": {
                            "type": "STRING",
                            "description": "Category of tip: spiritual, health, nutrition, or productivity."
                        }
                    },
                    "required": ["category"]
                }
            }
        ]
    }])
}
