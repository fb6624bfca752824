use std::fmt;

/// 账单默认最大位数
pub const DEFAULT_MAX_DIGITS: usize = 5;
/// 账单允许配置的最大位数（9 位乘以 30 仍在 u64 范围内）
pub const MAX_SUPPORTED_DIGITS: usize = 9;

/// 键盘按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumButton {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Clear,
}

impl NumButton {
    /// 键盘布局（按行）
    pub const KEYPAD: [&'static [NumButton]; 4] = [
        &[NumButton::Seven, NumButton::Eight, NumButton::Nine],
        &[NumButton::Four, NumButton::Five, NumButton::Six],
        &[NumButton::One, NumButton::Two, NumButton::Three],
        &[NumButton::Zero, NumButton::Clear],
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Zero => "0",
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Clear => "AC",
        }
    }

    /// 数字按钮对应的字符，清除键返回 None
    pub fn digit(&self) -> Option<char> {
        match self {
            Self::Clear => None,
            other => other.title().chars().next(),
        }
    }

    pub fn from_digit(c: char) -> Option<Self> {
        let button = match c {
            '0' => Self::Zero,
            '1' => Self::One,
            '2' => Self::Two,
            '3' => Self::Three,
            '4' => Self::Four,
            '5' => Self::Five,
            '6' => Self::Six,
            '7' => Self::Seven,
            '8' => Self::Eight,
            '9' => Self::Nine,
            _ => return None,
        };
        Some(button)
    }

    /// 0 键占两个按钮宽度
    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Zero)
    }
}

/// 小费栏上方的硬币图标
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coin {
    One,
    Two,
    Three,
}

impl Coin {
    pub const ALL: [Coin; 3] = [Coin::One, Coin::Two, Coin::Three];

    pub fn image(&self) -> &'static str {
        match self {
            Self::One => "OneCoin",
            Self::Two => "TwoCoins",
            Self::Three => "ThreeCoins",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::One => "●",
            Self::Two => "●●",
            Self::Three => "●●●",
        }
    }
}

/// 固定小费比例（百分数）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TipRate {
    pub percent: u64,
}

pub const TIP_RATES: [TipRate; 3] = [
    TipRate { percent: 10 },
    TipRate { percent: 20 },
    TipRate { percent: 30 },
];

impl TipRate {
    /// 按比例计算小费，四舍五入（0.5 远离零）
    pub fn apply(&self, bill: u64) -> u64 {
        (bill * self.percent + 50) / 100
    }

    pub fn placeholder(&self) -> TipSlot {
        TipSlot::Placeholder(self.percent)
    }
}

/// 单个小费栏位
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipSlot {
    Placeholder(u64), // 百分比标签，如 "10%"
    Amount(u64),      // "$<金额>"
    Collision,        // 去重策略下的 "--"
}

impl fmt::Display for TipSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Placeholder(percent) => write!(f, "{percent}%"),
            Self::Amount(amount) => write!(f, "${amount}"),
            Self::Collision => f.write_str("--"),
        }
    }
}

/// 账单状态：已输入的数字以及三个派生的小费栏位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillState {
    bill: String,
    tips: [TipSlot; 3],
    max_digits: usize,
    dedup: bool,
}

impl Default for BillState {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIGITS, false)
    }
}

impl BillState {
    pub fn new(max_digits: usize, dedup: bool) -> Self {
        Self {
            bill: String::new(),
            tips: TIP_RATES.map(|rate| rate.placeholder()),
            max_digits: max_digits.clamp(1, MAX_SUPPORTED_DIGITS),
            dedup,
        }
    }

    pub fn bill(&self) -> &str {
        &self.bill
    }

    pub fn tips(&self) -> &[TipSlot; 3] {
        &self.tips
    }

    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub fn dedup(&self) -> bool {
        self.dedup
    }

    /// 账单数值，空账单返回 None
    pub fn value(&self) -> Option<u64> {
        if self.bill.is_empty() {
            return None;
        }
        self.bill.parse().ok()
    }

    /// 账单显示文本
    pub fn display(&self) -> String {
        if self.bill.is_empty() {
            "$0".to_string()
        } else {
            format!("${}", self.bill)
        }
    }

    pub fn tip_labels(&self) -> [String; 3] {
        self.tips.map(|slot| slot.to_string())
    }

    /// 追加一位数字，返回是否被接受
    ///
    /// 以下情况忽略：非数字字符、空账单时输入 0、已达最大位数。
    pub fn apply_digit(&mut self, d: char) -> bool {
        if !d.is_ascii_digit() {
            return false;
        }
        if self.bill.is_empty() && d == '0' {
            return false;
        }
        if self.bill.len() >= self.max_digits {
            return false;
        }

        self.bill.push(d);
        self.recompute_tips();
        true
    }

    /// 清空账单并恢复占位标签
    pub fn apply_clear(&mut self) {
        self.bill.clear();
        self.tips = TIP_RATES.map(|rate| rate.placeholder());
    }

    /// 处理一次按键
    pub fn press(&mut self, button: NumButton) -> bool {
        match button.digit() {
            Some(d) => self.apply_digit(d),
            None => {
                self.apply_clear();
                true
            }
        }
    }

    /// 切换去重策略，并按当前账单重新计算
    pub fn set_dedup(&mut self, dedup: bool) {
        self.dedup = dedup;
        self.recompute_tips();
    }

    fn recompute_tips(&mut self) {
        // 空账单或 0 不重新计算
        let Some(value) = self.value().filter(|v| *v != 0) else {
            return;
        };

        for (i, rate) in TIP_RATES.iter().enumerate() {
            let amount = rate.apply(value);
            if !self.dedup {
                self.tips[i] = TipSlot::Amount(amount);
                continue;
            }
            if amount == 0 {
                self.tips[i] = TipSlot::Collision;
                continue;
            }
            for earlier in &mut self.tips[..i] {
                if *earlier == TipSlot::Amount(amount) {
                    *earlier = TipSlot::Collision;
                }
            }
            self.tips[i] = TipSlot::Amount(amount);
        }
    }
}
