use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Buy,
    DoNotBuy,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Buy => f.write_str("Buy"),
            Decision::DoNotBuy => f.write_str("Do not buy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub decision: Decision,
    pub reason: String,
}

impl Recommendation {
    pub fn buy() -> Self {
        Self {
            decision: Decision::Buy,
            reason: "within tolerance".to_string(),
        }
    }

    pub fn do_not_buy() -> Self {
        Self {
            decision: Decision::DoNotBuy,
            reason: "risk exceeds tolerance".to_string(),
        }
    }

    pub fn is_buy(&self) -> bool {
        self.decision == Decision::Buy
    }

    /// 报告末尾的寄语
    pub fn closing_message(&self) -> &'static str {
        match self.decision {
            Decision::Buy => "Happy investing!",
            Decision::DoNotBuy => "You could try a different investment.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.decision, self.reason)
    }
}
