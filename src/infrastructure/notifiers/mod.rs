pub mod banner;
pub mod noop;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Event;
use crate::domain::models::NotifierBox;
use crate::domain::models::NotifierName;

pub struct NotifierManager {}

impl NotifierManager {
    pub fn get(name: NotifierName, tx: mpsc::UnboundedSender<Event>) -> Result<NotifierBox> {
        if name == NotifierName::Banner {
            return Ok(Box::new(banner::BannerNotifier::new(tx)));
        }

        if name == NotifierName::None {
            return Ok(Box::<noop::NoopNotifier>::default());
        }

        bail!(format!("No notifier implemented for {name}"))
    }
}
