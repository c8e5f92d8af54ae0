use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, DonationFocus},
};
use crate::domain::checkout::{PAYMENT_ERROR_RESET, VERIFICATION_FAILED_RESET};
use crate::domain::donation::{plan_submission, DonationStatus, PRESET_AMOUNTS};
use std::time::Duration;
use tracing::debug;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::FocusNext => {
            let next = state.donation.focus.next();
            move_focus(state, next);
            UpdateResult::Handled(None)
        }
        Action::FocusPrev => {
            let prev = state.donation.focus.prev();
            move_focus(state, prev);
            UpdateResult::Handled(None)
        }
        Action::FocusCustom => {
            move_focus(state, DonationFocus::Custom);
            UpdateResult::Handled(None)
        }
        Action::DonateAmountInput(c) => {
            state.donation.push_input(*c);
            UpdateResult::Handled(None)
        }
        Action::DonateAmountBackspace => {
            state.donation.backspace();
            UpdateResult::Handled(None)
        }
        Action::ActivateFocused => match state.donation.focus {
            DonationFocus::Preset(i) => {
                UpdateResult::Handled(PRESET_AMOUNTS.get(i).and_then(|a| submit(state, *a)))
            }
            DonationFocus::Custom => UpdateResult::Handled(submit_custom(state)),
        },
        Action::SubmitPreset(amount) => UpdateResult::Handled(submit(state, *amount)),
        Action::SubmitCustomAmount => UpdateResult::Handled(submit_custom(state)),

        // --- Status writes from the checkout task and timers ---
        Action::StatusExpired(seq) => {
            state.donation.expire_status(*seq);
            UpdateResult::Handled(None)
        }
        Action::VerificationRejected(attempt) => UpdateResult::Handled(fail(
            state,
            *attempt,
            DonationStatus::VerificationFailed,
            VERIFICATION_FAILED_RESET,
        )),
        Action::CheckoutFailed(attempt) => UpdateResult::Handled(fail(
            state,
            *attempt,
            DonationStatus::PaymentError,
            PAYMENT_ERROR_RESET,
        )),
        Action::SessionCreated(attempt, session) => {
            if *attempt != state.donation.attempt {
                debug!(attempt, %session, "session from an older attempt, not redirecting");
                return UpdateResult::Handled(None);
            }
            state.donation.set_status(DonationStatus::Idle);
            UpdateResult::Handled(Some(Command::RedirectToCheckout(session.clone())))
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Leaving the custom field counts as a blur and validates quietly.
fn move_focus(state: &mut AppState, to: DonationFocus) {
    if state.donation.focus == DonationFocus::Custom && to != DonationFocus::Custom {
        state.donation.validate(false);
    }
    state.donation.focus = to;
}

fn submit_custom(state: &mut AppState) -> Option<Command> {
    if state.donation.is_processing() {
        return None;
    }
    state.donation.validate(true);
    let plan = plan_submission(&state.donation.amount, state.over_limit_policy);
    match plan.amount {
        Some(amount) => submit(state, amount),
        None => {
            debug!(advisory = ?plan.advisory, "custom amount not submitted");
            None
        }
    }
}

/// Starts a checkout unless one is already processing.
fn submit(state: &mut AppState, amount: u64) -> Option<Command> {
    if state.donation.is_processing() {
        debug!(amount, "checkout already processing, submission ignored");
        return None;
    }
    let attempt = state.donation.begin_attempt();
    let status_seq = state.donation.set_status(DonationStatus::Processing);
    Some(Command::Checkout {
        attempt,
        status_seq,
        amount,
    })
}

fn fail(
    state: &mut AppState,
    attempt: u64,
    status: DonationStatus,
    delay: Duration,
) -> Option<Command> {
    if attempt != state.donation.attempt {
        return None;
    }
    let status_seq = state.donation.set_status(status);
    Some(Command::ResetStatusAfter { status_seq, delay })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::content::ContentIndex;
    use crate::domain::donation::{AmountIssue, OverLimitPolicy};
    use crate::domain::ports::SessionId;

    fn state_with(policy: OverLimitPolicy) -> AppState {
        let mut config = Config::default();
        config.donation.over_limit_policy = policy;
        AppState::new(&config, ContentIndex::default())
    }

    fn command(result: UpdateResult) -> Option<Command> {
        match result {
            UpdateResult::Handled(cmd) => cmd,
            UpdateResult::NotHandled => panic!("action not handled"),
        }
    }

    fn type_amount(state: &mut AppState, raw: &str) {
        update(state, &Action::FocusCustom);
        for c in raw.chars() {
            update(state, &Action::DonateAmountInput(c));
        }
    }

    #[test]
    fn test_preset_starts_checkout() {
        let mut state = state_with(OverLimitPolicy::Advise);
        let cmd = command(update(&mut state, &Action::SubmitPreset(50)));
        assert_eq!(
            cmd,
            Some(Command::Checkout {
                attempt: 1,
                status_seq: 1,
                amount: 50
            })
        );
        assert_eq!(state.donation.status, DonationStatus::Processing);
    }

    #[test]
    fn test_submission_ignored_while_processing() {
        let mut state = state_with(OverLimitPolicy::Advise);
        update(&mut state, &Action::SubmitPreset(10));
        assert_eq!(command(update(&mut state, &Action::SubmitPreset(20))), None);
        type_amount(&mut state, "30");
        assert_eq!(command(update(&mut state, &Action::SubmitCustomAmount)), None);
        assert_eq!(state.donation.attempt, 1);
    }

    #[test]
    fn test_formatted_custom_amount_submits_integer() {
        let mut state = state_with(OverLimitPolicy::Advise);
        type_amount(&mut state, "1,000");
        assert_eq!(state.donation.display_amount(), "$1,000");

        let cmd = command(update(&mut state, &Action::SubmitCustomAmount));
        assert!(matches!(cmd, Some(Command::Checkout { amount: 1000, .. })));
        assert_eq!(state.donation.message, Some(AmountIssue::OverLimit));
    }

    #[test]
    fn test_long_custom_amount_charges_what_is_displayed() {
        let mut state = state_with(OverLimitPolicy::Advise);
        type_amount(&mut state, "99999999999999999999999");
        assert_eq!(state.donation.display_amount(), "$999,999,999,999");

        let cmd = command(update(&mut state, &Action::SubmitCustomAmount));
        assert!(matches!(
            cmd,
            Some(Command::Checkout {
                amount: 999_999_999_999,
                ..
            })
        ));
    }

    #[test]
    fn test_over_limit_blocked_by_policy() {
        let mut state = state_with(OverLimitPolicy::Block);
        type_amount(&mut state, "2500");
        assert_eq!(command(update(&mut state, &Action::SubmitCustomAmount)), None);
        assert_eq!(state.donation.message, Some(AmountIssue::OverLimit));
        assert_eq!(state.donation.status, DonationStatus::Idle);
    }

    #[test]
    fn test_empty_custom_amount_never_submits() {
        let mut state = state_with(OverLimitPolicy::Advise);
        update(&mut state, &Action::FocusCustom);
        assert_eq!(command(update(&mut state, &Action::ActivateFocused)), None);
        assert_eq!(state.donation.message, Some(AmountIssue::Missing));

        type_amount(&mut state, "0");
        assert_eq!(command(update(&mut state, &Action::SubmitCustomAmount)), None);
    }

    #[test]
    fn test_leaving_field_validates_quietly() {
        let mut state = state_with(OverLimitPolicy::Advise);
        update(&mut state, &Action::FocusCustom);
        update(&mut state, &Action::FocusNext);
        assert_eq!(state.donation.message, None);

        type_amount(&mut state, "5000");
        update(&mut state, &Action::FocusPrev);
        assert_eq!(state.donation.message, Some(AmountIssue::OverLimit));
        assert_eq!(state.donation.focus, DonationFocus::Preset(PRESET_AMOUNTS.len() - 1));
    }

    #[test]
    fn test_activate_on_preset_uses_its_amount() {
        let mut state = state_with(OverLimitPolicy::Advise);
        update(&mut state, &Action::FocusNext);
        let cmd = command(update(&mut state, &Action::ActivateFocused));
        assert!(matches!(cmd, Some(Command::Checkout { amount: 20, .. })));
    }

    #[test]
    fn test_rejection_schedules_long_reset() {
        let mut state = state_with(OverLimitPolicy::Advise);
        update(&mut state, &Action::SubmitPreset(10));
        let cmd = command(update(&mut state, &Action::VerificationRejected(1)));
        assert_eq!(
            cmd,
            Some(Command::ResetStatusAfter {
                status_seq: 2,
                delay: VERIFICATION_FAILED_RESET
            })
        );
        assert_eq!(state.donation.status, DonationStatus::VerificationFailed);

        // The processing timer for write 1 fires late and must not clobber this.
        update(&mut state, &Action::StatusExpired(1));
        assert_eq!(state.donation.status, DonationStatus::VerificationFailed);
        update(&mut state, &Action::StatusExpired(2));
        assert_eq!(state.donation.status, DonationStatus::Idle);
    }

    #[test]
    fn test_results_from_old_attempts_are_dropped() {
        let mut state = state_with(OverLimitPolicy::Advise);
        update(&mut state, &Action::SubmitPreset(10));
        update(&mut state, &Action::StatusExpired(1));
        update(&mut state, &Action::SubmitPreset(20));

        assert_eq!(command(update(&mut state, &Action::CheckoutFailed(1))), None);
        assert_eq!(state.donation.status, DonationStatus::Processing);

        let cmd = command(update(&mut state, &Action::CheckoutFailed(2)));
        assert!(matches!(
            cmd,
            Some(Command::ResetStatusAfter { delay, .. }) if delay == PAYMENT_ERROR_RESET
        ));
        assert_eq!(state.donation.status, DonationStatus::PaymentError);
    }

    #[test]
    fn test_redirect_returns_to_idle() {
        let mut state = state_with(OverLimitPolicy::Advise);
        update(&mut state, &Action::SubmitPreset(100));
        let session = SessionId("cs_1".to_string());
        let cmd = command(update(&mut state, &Action::SessionCreated(1, session.clone())));
        assert_eq!(cmd, Some(Command::RedirectToCheckout(session)));
        assert_eq!(state.donation.status, DonationStatus::Idle);
    }

    #[test]
    fn test_session_from_older_attempt_never_redirects() {
        let mut state = state_with(OverLimitPolicy::Advise);
        update(&mut state, &Action::SubmitPreset(10));
        // The processing reset lets a second submission start before the first returns
        let seq = state.donation.status_seq;
        update(&mut state, &Action::StatusExpired(seq));
        update(&mut state, &Action::SubmitPreset(20));
        assert_eq!(state.donation.attempt, 2);

        let stale = Action::SessionCreated(1, SessionId("cs_old".to_string()));
        assert_eq!(command(update(&mut state, &stale)), None);
        assert_eq!(state.donation.status, DonationStatus::Processing);

        let current = SessionId("cs_new".to_string());
        let cmd = command(update(&mut state, &Action::SessionCreated(2, current.clone())));
        assert_eq!(cmd, Some(Command::RedirectToCheckout(current)));
    }
}
