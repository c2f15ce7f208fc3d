/// Success-rate band that selects the suggestion pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// success_rate < 70
    NeedsPractice,
    /// 70 <= success_rate < 90
    Developing,
    /// success_rate >= 90
    Proficient,
}

const LOW_THRESHOLD: f64 = 70.0;
const HIGH_THRESHOLD: f64 = 90.0;

impl Tier {
    pub fn for_success_rate(rate: f64) -> Tier {
        if rate < LOW_THRESHOLD {
            Tier::NeedsPractice
        } else if rate < HIGH_THRESHOLD {
            Tier::Developing
        } else {
            Tier::Proficient
        }
    }

    pub fn suggestions(self) -> [&'static str; 2] {
        match self {
            Tier::NeedsPractice => [
                "Increase practice with high-stress scenarios.",
                "Focus on improving reaction time through drills.",
            ],
            Tier::Developing => [
                "Refine flight precision with targeted simulations.",
                "Optimize decision-making speed in VR training.",
            ],
            Tier::Proficient => [
                "Maintain current training regimen.",
                "Explore advanced modules for further improvement.",
            ],
        }
    }
}
