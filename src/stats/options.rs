/// Error-compensation strategy for floating point summation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummationCompensation {
    /// Plain left-to-right accumulation
    #[default]
    None,
    /// Kahan-Babushka-Neumaier first-order compensation
    KahanBabushkaNeumaier,
    /// Second-order Kahan-Babushka (Klein) compensation; not available in this version
    KahanBabushka,
    /// Recursive pairwise summation
    Pairwise,
}

/// Options for `sum_float_with` / `sum_float_with_as`
#[derive(Debug, Clone, PartialEq)]
pub struct SumOptions {
    /// Compensation strategy
    pub compensation: SummationCompensation,
    /// Fail with `Overflow` when accumulation leaves the finite range
    pub checked: bool,
}

impl Default for SumOptions {
    fn default() -> Self {
        SumOptions {
            compensation: SummationCompensation::None,
            checked: false,
        }
    }
}

impl SumOptions {
    pub fn builder() -> SumOptionsBuilder {
        SumOptionsBuilder::new()
    }
}

/// Builder for SumOptions
#[derive(Debug, Clone, Default)]
pub struct SumOptionsBuilder {
    options: SumOptions,
}

impl SumOptionsBuilder {
    /// Creates a new builder
    pub fn new() -> Self {
        SumOptionsBuilder {
            options: SumOptions::default(),
        }
    }

    /// Sets the compensation strategy
    pub fn compensation(mut self, compensation: SummationCompensation) -> Self {
        self.options.compensation = compensation;
        self
    }

    /// Sets overflow checking
    pub fn checked(mut self, checked: bool) -> Self {
        self.options.checked = checked;
        self
    }

    /// Builds the options
    pub fn build(self) -> SumOptions {
        self.options
    }
}
