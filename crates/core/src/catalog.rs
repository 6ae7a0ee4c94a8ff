use crate::model::code::ChapterCode;

//
// ─── CATALOG TYPES ─────────────────────────────────────────────────────────────
//

/// One chapter as listed in the exam catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    name: String,
    code: ChapterCode,
}

impl ChapterEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, code: ChapterCode) -> Self {
        Self {
            name: name.into(),
            code,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn code(&self) -> ChapterCode {
        self.code
    }
}

/// A subject and its ordered chapters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    name: String,
    chapters: Vec<ChapterEntry>,
}

impl Subject {
    #[must_use]
    pub fn new(name: impl Into<String>, chapters: Vec<ChapterEntry>) -> Self {
        Self {
            name: name.into(),
            chapters,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn chapters(&self) -> &[ChapterEntry] {
        &self.chapters
    }
}

/// An exam level and its ordered subjects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    name: String,
    subjects: Vec<Subject>,
}

impl Level {
    #[must_use]
    pub fn new(name: impl Into<String>, subjects: Vec<Subject>) -> Self {
        Self {
            name: name.into(),
            subjects,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    #[must_use]
    pub fn subject(&self, name: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.name == name)
    }
}

/// The level → subject → chapter hierarchy mock tests are configured against.
///
/// Lookups are explicit traversals returning `Option`; an unknown level or
/// subject is an ordinary "not found", never a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    levels: Vec<Level>,
}

impl Catalog {
    #[must_use]
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    #[must_use]
    pub fn level(&self, name: &str) -> Option<&Level> {
        self.levels.iter().find(|l| l.name == name)
    }

    #[must_use]
    pub fn subject(&self, level: &str, subject: &str) -> Option<&Subject> {
        self.level(level)?.subject(subject)
    }

    /// Chapters for one level/subject pair, or `None` if the pair is unknown.
    #[must_use]
    pub fn chapters(&self, level: &str, subject: &str) -> Option<&[ChapterEntry]> {
        Some(self.subject(level, subject)?.chapters())
    }

    /// The built-in CFA curriculum.
    ///
    /// Level I carries the full subject/chapter table; Levels II and III are
    /// placeholders until their curricula are loaded. Chapter codes are
    /// assigned from table order, so `LEVEL_ONE[s]`'s chapter `c` is
    /// `1-<s+1>-<c+1>`.
    #[must_use]
    pub fn cfa() -> Self {
        let subjects = LEVEL_ONE
            .iter()
            .enumerate()
            .map(|(subject_index, (name, chapters))| {
                let chapters = chapters
                    .iter()
                    .enumerate()
                    .map(|(chapter_index, chapter)| {
                        ChapterEntry::new(
                            *chapter,
                            ChapterCode::from_parts(
                                1,
                                subject_index as u8 + 1,
                                chapter_index as u8 + 1,
                            ),
                        )
                    })
                    .collect();
                Subject::new(*name, chapters)
            })
            .collect();

        Self::new(vec![
            Level::new("Level I", subjects),
            Level::new("Level II", Vec::new()),
            Level::new("Level III", Vec::new()),
        ])
    }
}

//
// ─── LEVEL I TABLE ─────────────────────────────────────────────────────────────
//

const LEVEL_ONE: &[(&str, &[&str])] = &[
    (
        "Ethics & Professional Standards",
        &[
            "Ethics and Trust in the Investment Profession",
            "Code of Ethics and Standards of Professional Conduct",
            "Guidance for Standards I-VII",
            "Introduction to the Global Investment Performance",
            "Ethics Application",
        ],
    ),
    (
        "Financial Statement Analysis",
        &[
            "Introduction to Financial Statement Analysis",
            "Analyzing Income Statements",
            "Analyzing Balance Sheets",
            "Analyzing Statements of Cash Flows I",
            "Analyzing Statements of Cash Flows II",
            "Analysis of Inventories",
            "Analysis of Long-Term Assets",
            "Topics in Long-Term Liabilities and Equity",
            "Analysis of Income Taxes",
            "Financial Reporting Quality",
            "Financial Analysis Techniques",
            "Introduction to Financial Statement Modeling",
        ],
    ),
    (
        "Alternative Investments",
        &[
            "Alternative Investment Features, Methods, and Structures",
            "Alternative Investment Performance and Returns",
            "Investment in Private Capital: Equity and Debt",
            "Real Estate and Infrastructure",
            "Natural Resources",
            "Hedge Funds",
            "Introduction to Digital Assets",
        ],
    ),
    (
        "Derivatives",
        &[
            "Derivative Instrument and Derivative Market Features",
            "Forward Commitment and Contingent Claim Features and Instruments",
            "Derivative Benefits, Risks, and Issuer and Investor Uses",
            "Arbitrage, Replication, and the Cost of Carry in Pricing Derivatives",
            "Pricing and Valuation of Forward Contracts and for an Underlying with Varying Maturities",
            "Pricing and Valuation of Futures Contracts",
            "Pricing and Valuation of Interest Rates and Other Swaps",
            "Pricing and Valuation of Options",
            "Option Replication Using Put-Call Parity",
            "Valuing a Derivative Using a One-Period Binomial Model",
        ],
    ),
    (
        "Quantitative Methods",
        &[
            "Rates and Returns",
            "The Time Value of Money in Finance",
            "Statistical Measures of Asset Returns",
            "Probability Trees",
            "Portfolio Mathematics",
            "Simulation Methods",
            "Estimation and Inference",
            "Hypothesis Testing",
            "Parametric and Non-Parametric Tests of Independence",
            "Simple Linear Regression",
            "Introduction to Big Data Techniques",
        ],
    ),
    (
        "Economics",
        &[
            "Firms and Market Structures",
            "Understanding Business Cycles",
            "Fiscal Policy",
            "Monetary Policy",
            "Introduction to Geopolitics",
            "International Trade",
            "Capital Flows and the FX Market",
            "Exchange Rate Calculations",
        ],
    ),
    (
        "Corporate Issuers",
        &[
            "Organizational Forms, Corporate Issuer Features, and Ownership",
            "Investors and Other Stakeholders",
            "Corporate Governance: Conflicts, Mechanisms, Risks",
            "Working Capital and Liquidity",
            "Capital Investments and Capital Allocation",
            "Capital Structure",
            "Business Models",
        ],
    ),
    (
        "Equity",
        &[
            "Market Organization and Structure",
            "Security Market Indexes",
            "Market Efficiency",
            "Overview of Equity Securities",
            "Company Analysis: Past and Present",
            "Industry and Competitive Analysis",
            "Company Analysis: Forecasting",
            "Equity Valuation: Concepts and Basic Tools",
        ],
    ),
    (
        "Fixed Income",
        &[
            "Fixed-Income Instrument Features",
            "Fixed-Income Cash Flows and Types",
            "Fixed-Income Issuance and Trading",
            "Fixed-Income Markets for Corporate Issuers",
            "Fixed-Income Markets for Government Issuers",
            "Fixed-Income Bond Valuation: Prices and Yields",
            "Yield and Yield Spread Measures for Fixed Rate Bonds",
            "Yield and Yield Spread Measures for Floating-Rate Instruments",
            "The Term Structure of Interest Rates: Spot, Par, and Forward Curve",
            "Interest Rate Risk and Return",
            "Yield-Based Bond Duration Measures and Properties",
            "Yield-Based Bond Convexity and Portfolio Properties",
            "Curve-Based and Empirical Fixed-Income Risk Measures",
            "Credit Risk",
            "Credit Analysis for Government Issuers",
            "Credit Analysis for Corporate Issuers",
            "Fixed-Income Securitization",
            "Asset-Backed Security (ABS) Instrument and Market Features",
            "Mortgage-Backed Security (MBS) Instrument and Market Features",
        ],
    ),
    (
        "Portfolio Management",
        &[
            "Portfolio Risk and Return: Part I",
            "Portfolio Risk and Return: Part II",
            "Portfolio Management: An Overview",
            "Basics of Portfolio Planning and Construction",
            "The Behavioral Biases of Individuals",
            "Introduction to Risk Management",
        ],
    ),
];

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
