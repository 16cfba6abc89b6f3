mod notification;

pub use notification::{split, FrameQueue, NotificationHandler, NotificationSource, NotifyError};
