use std::collections::BTreeMap;
use std::fmt;

use importmap::{Context, UnresolvableTarget, resolve_url};

use crate::fixture::Fixture;

/// What a single check inside a fixture exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckKind {
    Url,
    Compose,
    Resolve,
}

impl CheckKind {
    pub fn label(self) -> &'static str {
        match self {
            CheckKind::Url => "url",
            CheckKind::Compose => "compose",
            CheckKind::Resolve => "resolve",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn absorb(&mut self, other: Tally) {
        self.passed += other.passed;
        self.failed += other.failed;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A url or resolve case produced a different result.
    Mismatch {
        kind: CheckKind,
        subject: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    /// A map was rejected although the fixture does not expect a conflict.
    UnexpectedConflict(String),
    /// The fixture expects a conflict but every map composed.
    MissingConflict,
    Panic(String),
}

impl Issue {
    /// Grouping key for the analysis report.
    pub fn class(&self) -> &'static str {
        match self {
            Issue::Mismatch { kind: CheckKind::Url, .. } => "url mismatch",
            Issue::Mismatch { kind: CheckKind::Compose, .. } => "compose mismatch",
            Issue::Mismatch { kind: CheckKind::Resolve, .. } => "resolve mismatch",
            Issue::UnexpectedConflict(_) => "unexpected conflict",
            Issue::MissingConflict => "missing conflict",
            Issue::Panic(_) => "panic",
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::Mismatch {
                kind,
                subject,
                expected,
                actual,
            } => write!(
                f,
                "{} {subject}: expected {}, got {}",
                kind.label(),
                show(expected),
                show(actual)
            ),
            Issue::UnexpectedConflict(message) => write!(f, "unexpected conflict: {message}"),
            Issue::MissingConflict => f.write_str("expected an override conflict but maps composed"),
            Issue::Panic(message) => write!(f, "panicked: {message}"),
        }
    }
}

/// Everything one fixture file produced.
#[derive(Debug, Clone, Default)]
pub struct FixtureReport {
    pub description: Option<String>,
    pub checks: BTreeMap<CheckKind, Tally>,
    pub issues: Vec<Issue>,
    /// Entries dropped while composing the fixture's maps.
    pub dropped: Vec<UnresolvableTarget>,
    pub skipped: Option<String>,
}

impl FixtureReport {
    pub fn skipped(reason: impl Into<String>) -> Self {
        Self {
            skipped: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn panicked(message: String) -> Self {
        Self {
            issues: vec![Issue::Panic(message)],
            ..Self::default()
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    pub fn is_failed(&self) -> bool {
        !self.is_skipped() && !self.issues.is_empty()
    }

    fn check(&mut self, kind: CheckKind, issue: Option<Issue>) {
        let tally = self.checks.entry(kind).or_default();
        match issue {
            None => tally.passed += 1,
            Some(issue) => {
                tally.failed += 1;
                self.issues.push(issue);
            }
        }
    }
}

pub fn run_fixture(fixture: &Fixture) -> FixtureReport {
    let mut report = FixtureReport {
        description: fixture.description.clone(),
        ..FixtureReport::default()
    };

    for case in &fixture.urls {
        let actual = resolve_url(&case.input, &case.base);
        let issue = (actual != case.expected).then(|| Issue::Mismatch {
            kind: CheckKind::Url,
            subject: format!("'{}' against {}", case.input, case.base),
            expected: case.expected.clone(),
            actual,
        });
        report.check(CheckKind::Url, issue);
    }

    if fixture.needs_base() {
        let Some(base) = fixture.base.as_deref() else {
            return FixtureReport::skipped("fixture has maps or cases but no base");
        };
        run_cases(fixture, base, &mut report);
    }

    report
}

/// Compose the maps in order, then check every lookup. A conflict stops
/// composition; lookups run against the maps composed before it.
fn run_cases(fixture: &Fixture, base: &str, report: &mut FixtureReport) {
    let mut ctx = Context::new(base);
    let conflict = fixture
        .maps
        .iter()
        .find_map(|map| ctx.add_map(map).err());
    report.dropped = ctx.warnings().to_vec();

    if !fixture.maps.is_empty() {
        let issue = match (conflict, fixture.conflict) {
            (Some(err), false) => Some(Issue::UnexpectedConflict(err.to_string())),
            (None, true) => Some(Issue::MissingConflict),
            _ => None,
        };
        let unexpected = matches!(issue, Some(Issue::UnexpectedConflict(_)));
        report.check(CheckKind::Compose, issue);
        if unexpected {
            return;
        }
    }

    let default_parent = fixture.parent.as_deref().unwrap_or(base);
    for case in &fixture.cases {
        let parent = case.parent.as_deref().unwrap_or(default_parent);
        let actual = ctx.resolve(&case.specifier, Some(parent)).into_option();
        let issue = (actual != case.expected).then(|| Issue::Mismatch {
            kind: CheckKind::Resolve,
            subject: format!("'{}' from {parent}", case.specifier),
            expected: case.expected.clone(),
            actual,
        });
        report.check(CheckKind::Resolve, issue);
    }
}

fn show(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}
