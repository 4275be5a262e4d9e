use pfe_quest_game::{SpeechError, SpeechSynth, Utterance};
use yew::Callback;

/// `window.speechSynthesis`, when the browser has one.
#[derive(Clone, PartialEq)]
pub struct BrowserSpeech {
    after_settle: Callback<()>,
}

impl BrowserSpeech {
    #[must_use]
    pub const fn new(after_settle: Callback<()>) -> Self {
        Self { after_settle }
    }
}

#[cfg(target_arch = "wasm32")]
impl SpeechSynth for BrowserSpeech {
    fn is_available(&self) -> bool {
        web_sys::window().is_some_and(|win| {
            js_sys::Reflect::has(&win, &wasm_bindgen::JsValue::from_str("speechSynthesis"))
                .unwrap_or(false)
        })
    }

    fn speak(
        &self,
        utterance: Utterance,
        on_settled: Box<dyn FnOnce()>,
    ) -> Result<(), SpeechError> {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;
        use web_sys::SpeechSynthesisUtterance;

        let synth = web_sys::window()
            .ok_or(SpeechError::Unsupported)?
            .speech_synthesis()
            .map_err(|_| SpeechError::Unsupported)?;
        let request = SpeechSynthesisUtterance::new_with_text(&utterance.text)
            .map_err(|err| SpeechError::Dispatch(crate::dom::js_error_message(&err)))?;
        request.set_lang(&utterance.lang);
        request.set_rate(utterance.rate);

        // end and error share one slot so the engine callback runs once.
        let slot: Rc<RefCell<Option<Box<dyn FnOnce()>>>> = Rc::new(RefCell::new(Some(on_settled)));
        let settle = |slot: Rc<RefCell<Option<Box<dyn FnOnce()>>>>, after: Callback<()>| {
            Closure::<dyn FnMut()>::new(move || {
                let pending = slot.borrow_mut().take();
                if let Some(done) = pending {
                    done();
                    after.emit(());
                }
            })
        };
        let on_end = settle(slot.clone(), self.after_settle.clone());
        let on_error = settle(slot, self.after_settle.clone());
        request.set_onend(Some(on_end.as_ref().unchecked_ref()));
        request.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_end.forget();
        on_error.forget();

        log::debug!("speaking {} chars ({})", utterance.text.len(), utterance.lang);
        synth.speak(&request);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SpeechSynth for BrowserSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn speak(
        &self,
        _utterance: Utterance,
        _on_settled: Box<dyn FnOnce()>,
    ) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_engine_outside_the_browser() {
        let speech = BrowserSpeech::new(Callback::noop());
        assert!(!speech.is_available());
        let result = speech.speak(
            Utterance {
                text: "Bonjour".into(),
                lang: "fr-FR".into(),
                rate: 0.9,
            },
            Box::new(|| {}),
        );
        assert_eq!(result, Err(SpeechError::Unsupported));
    }
}
