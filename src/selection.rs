use crate::i18n::MessageId;
use serde::Serialize;

/// How much of a day's slot capacity has been filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionStatus {
    NotSelected,
    SelectedSome,
    SelectedAll,
}

impl SelectionStatus {
    pub fn message_id(self) -> MessageId {
        match self {
            Self::NotSelected => MessageId::StatusNotSelected,
            Self::SelectedSome => MessageId::StatusSelectedSome,
            Self::SelectedAll => MessageId::StatusSelectedAll,
        }
    }
}

/// Classifies a day from its selection count and slot capacity.
///
/// Partial selection is bounded by `meals_number` alone: once every meal slot is
/// filled the day counts as fully selected whether or not snacks were picked.
/// Counts above `meals_number + snacks_number` are corrupt input and fall back
/// to [`SelectionStatus::NotSelected`].
pub fn classify(selected_number: i64, meals_number: i64, snacks_number: i64) -> SelectionStatus {
    let total = meals_number.saturating_add(snacks_number);

    if selected_number == 0 {
        SelectionStatus::NotSelected
    } else if selected_number > 0 && selected_number < meals_number {
        SelectionStatus::SelectedSome
    } else if selected_number >= meals_number && selected_number <= total {
        SelectionStatus::SelectedAll
    } else {
        SelectionStatus::NotSelected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_selected_is_not_selected() {
        for meals in 0..5 {
            for snacks in 0..3 {
                assert_eq!(classify(0, meals, snacks), SelectionStatus::NotSelected);
            }
        }
    }

    #[test]
    fn below_meal_count_is_partial() {
        assert_eq!(classify(2, 5, 2), SelectionStatus::SelectedSome);
        for selected in 1..4 {
            assert_eq!(classify(selected, 4, 1), SelectionStatus::SelectedSome);
        }
    }

    #[test]
    fn meal_count_through_capacity_is_full() {
        assert_eq!(classify(5, 5, 2), SelectionStatus::SelectedAll);
        assert_eq!(classify(6, 5, 2), SelectionStatus::SelectedAll);
        assert_eq!(classify(7, 5, 2), SelectionStatus::SelectedAll);
        assert_eq!(classify(2, 2, 0), SelectionStatus::SelectedAll);
    }

    #[test]
    fn over_capacity_falls_back_to_not_selected() {
        assert_eq!(classify(8, 5, 2), SelectionStatus::NotSelected);
        assert_eq!(classify(1, 0, 0), SelectionStatus::NotSelected);
    }

    #[test]
    fn extreme_inputs_do_not_panic() {
        assert_eq!(classify(i64::MAX, i64::MAX, i64::MAX), SelectionStatus::SelectedAll);
        assert_eq!(classify(-1, 3, 1), SelectionStatus::NotSelected);
    }
}
