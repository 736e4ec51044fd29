//! Notifier that hands notices to the UI

use liveconf_core::{Notice, Notifier};
use yew::Callback;

/// Forwards every notice to a Yew callback, typically a toast list
#[derive(Clone, PartialEq)]
pub struct CallbackNotifier {
    on_notice: Callback<Notice>,
}

impl CallbackNotifier {
    pub fn new(on_notice: Callback<Notice>) -> Self {
        Self { on_notice }
    }
}

impl Notifier for CallbackNotifier {
    fn notify(&self, notice: Notice) {
        self.on_notice.emit(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liveconf_core::NoticeLevel;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn forwards_notices_to_callback() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = received.clone();
        let notifier = CallbackNotifier::new(Callback::from(move |notice: Notice| {
            sink.borrow_mut().push(notice);
        }));

        notifier.error("email already registered");

        let received = received.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].level, NoticeLevel::Error);
        assert_eq!(received[0].message, "email already registered");
    }
}
