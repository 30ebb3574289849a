//! Shared test infrastructure for button-panel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use button_panel::{
    ButtonConfig, ButtonInput, ButtonLayout, TextAnchor, TimeDuration, TimeInstant, TimeSource,
};
use core::cell::Cell;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Input
// ============================================================================

/// Mock button input whose raw level the test flips through a shared `Cell`
pub struct MockInput<'a> {
    level: &'a Cell<bool>,
}

impl<'a> MockInput<'a> {
    pub fn new(level: &'a Cell<bool>) -> Self {
        Self { level }
    }
}

impl ButtonInput for MockInput<'_> {
    fn is_pressed(&mut self) -> bool {
        self.level.get()
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Debounce interval used throughout the integration tests
pub const INTERVAL: TestDuration = TestDuration(20);

/// Builds a configuration with a name and a simple stacked text layout
pub fn named_config(name: &str, pixel: usize) -> ButtonConfig<16> {
    ButtonConfig::new(
        name,
        ButtonLayout::new(
            pixel,
            TextAnchor::new(4, 8 + 32 * pixel as i32),
            TextAnchor::new(64, 8 + 32 * pixel as i32),
        ),
    )
    .unwrap()
}
