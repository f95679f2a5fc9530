// Pointer end detection for effects that track a single global pointer.

/// Whether an event of type `kind` means the tracked pointer is gone.
///
/// `leaves_window` is true when the event has no related target, i.e. the
/// pointer moved out of the page rather than onto another element.
pub fn pointer_released(kind: &str, pointer_type: &str, leaves_window: bool) -> bool {
    match kind {
        "pointercancel" => true,
        // A lifted finger or pen has no hover position left.
        "pointerup" => pointer_type != "mouse",
        "pointerout" | "pointerleave" => leaves_window,
        _ => false,
    }
}

/// Event types to subscribe for [`pointer_released`].
pub const POINTER_END_EVENTS: [&str; 3] = ["pointerout", "pointercancel", "pointerup"];
