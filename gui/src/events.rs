use relay_api::ResponseDescriptor;

/// Messages from background sends back to the UI thread.
#[derive(Debug)]
pub enum GuiEvent {
  RequestCompleted(ResponseDescriptor),
  RequestFailed(String),
}
