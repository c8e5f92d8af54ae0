use crate::domain::ports::SessionId;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Open a URL in the system browser.
    Navigate(String),
    /// Run the checkout for `amount` dollars. `status_seq` is the `Processing` write.
    Checkout {
        attempt: u64,
        status_seq: u64,
        amount: u64,
    },
    /// Send the donor to the hosted payment page for this session.
    RedirectToCheckout(SessionId),
    /// Return the status to idle after `delay`, unless it was written again.
    ResetStatusAfter { status_seq: u64, delay: Duration },
}
