use serde::{Deserialize, Serialize};

/// Screens of the add-liquidity flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LiquidityView {
    /// Pool overview with strategy choice.
    #[default]
    Overview,
    /// Custom price-range editor.
    AddConcentrated,
    /// Deposit across the full price range.
    AddFullRange,
}

impl LiquidityView {
    #[must_use]
    pub fn is_strategy(self) -> bool {
        !matches!(self, Self::Overview)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    active: LiquidityView,
    selected_strategy: LiquidityView,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active: LiquidityView::Overview,
            selected_strategy: LiquidityView::AddFullRange,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn active(self) -> LiquidityView {
        self.active
    }

    #[must_use]
    pub fn selected_strategy(self) -> LiquidityView {
        self.selected_strategy
    }

    /// Highlights a strategy on the overview. `Overview` itself is ignored.
    pub fn select_strategy(&mut self, strategy: LiquidityView) {
        if strategy.is_strategy() {
            self.selected_strategy = strategy;
        }
    }

    /// Opens the selected strategy screen.
    pub fn proceed(&mut self) {
        self.active = self.selected_strategy;
    }

    pub fn back(&mut self) {
        self.active = LiquidityView::Overview;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overview_is_not_a_selectable_strategy() {
        let mut state = ViewState::default();
        state.select_strategy(LiquidityView::Overview);
        assert_eq!(state.selected_strategy(), LiquidityView::AddFullRange);
    }

    #[test]
    fn proceed_then_back_round_trips_to_overview() {
        let mut state = ViewState::default();
        state.select_strategy(LiquidityView::AddConcentrated);
        state.proceed();
        assert_eq!(state.active(), LiquidityView::AddConcentrated);
        state.back();
        assert_eq!(state.active(), LiquidityView::Overview);
        assert_eq!(state.selected_strategy(), LiquidityView::AddConcentrated);
    }
}
