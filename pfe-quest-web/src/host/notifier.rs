use pfe_quest_game::{Notice, Notifier};
use yew::Callback;

/// Forwards notices to a Yew callback, usually the toast host.
#[derive(Clone, PartialEq)]
pub struct CallbackNotifier {
    sink: Callback<Notice>,
}

impl CallbackNotifier {
    #[must_use]
    pub const fn new(sink: Callback<Notice>) -> Self {
        Self { sink }
    }
}

impl Notifier for CallbackNotifier {
    fn notify(&self, notice: Notice) {
        log::debug!("notice: {}", notice.key());
        self.sink.emit(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notices_reach_the_callback() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = seen.clone();
            Callback::from(move |n: Notice| seen.borrow_mut().push(n))
        };
        CallbackNotifier::new(sink).notify(Notice::BackBlocked);
        assert_eq!(*seen.borrow(), vec![Notice::BackBlocked]);
    }
}
