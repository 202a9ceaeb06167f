//! Sprite assets with an explicit loaded/not-loaded gate
//!
//! Decoding runs outside the loop (hosts may resolve slots asynchronously);
//! the loop only ever observes Pending/Ready/Failed per sprite. A failed
//! load is logged and degrades that sprite to placeholder rendering for the
//! rest of the process - it is not retried.

/// Every sprite the scene can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    /// The runner's sheet: two run frames, jump, dead
    Shiba,
    Candle1,
    Candle2,
    Candle3,
    Fisher,
}

pub const SPRITE_COUNT: usize = 5;

impl SpriteId {
    pub const ALL: [SpriteId; SPRITE_COUNT] = [
        SpriteId::Shiba,
        SpriteId::Candle1,
        SpriteId::Candle2,
        SpriteId::Candle3,
        SpriteId::Fisher,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SpriteId::Shiba => "assets/shiba_spritesheet.png",
            SpriteId::Candle1 => "assets/candle1.png",
            SpriteId::Candle2 => "assets/candle2.png",
            SpriteId::Candle3 => "assets/candle3.png",
            SpriteId::Fisher => "assets/fisher.png",
        }
    }

    fn index(self) -> usize {
        match self {
            SpriteId::Shiba => 0,
            SpriteId::Candle1 => 1,
            SpriteId::Candle2 => 2,
            SpriteId::Candle3 => 3,
            SpriteId::Fisher => 4,
        }
    }
}

/// Fetch-and-decode contract. May fail; failure must not stop the loop.
pub trait AssetLoader {
    type Bitmap;
    type Error: std::fmt::Display;

    fn load(&mut self, path: &str) -> Result<Self::Bitmap, Self::Error>;
}

#[derive(Debug)]
enum AssetSlot<B> {
    Pending,
    Ready(B),
    Failed,
}

/// One slot per sprite
#[derive(Debug)]
pub struct AssetStore<B> {
    slots: [AssetSlot<B>; SPRITE_COUNT],
}

impl<B> Default for AssetStore<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B> AssetStore<B> {
    pub fn new() -> Self {
        Self {
            slots: [
                AssetSlot::Pending,
                AssetSlot::Pending,
                AssetSlot::Pending,
                AssetSlot::Pending,
                AssetSlot::Pending,
            ],
        }
    }

    /// Resolve every pending slot through `loader`, logging failures.
    pub fn load_all<L>(&mut self, loader: &mut L)
    where
        L: AssetLoader<Bitmap = B>,
    {
        for id in SpriteId::ALL {
            if matches!(self.slots[id.index()], AssetSlot::Pending) {
                match loader.load(id.path()) {
                    Ok(bitmap) => self.mark_ready(id, bitmap),
                    Err(err) => {
                        log::warn!("asset load failed for {}: {err}", id.path());
                        self.mark_failed(id);
                    }
                }
            }
        }
    }

    /// For hosts that decode asynchronously: complete one slot.
    pub fn mark_ready(&mut self, id: SpriteId, bitmap: B) {
        self.slots[id.index()] = AssetSlot::Ready(bitmap);
    }

    pub fn mark_failed(&mut self, id: SpriteId) {
        self.slots[id.index()] = AssetSlot::Failed;
    }

    pub fn get(&self, id: SpriteId) -> Option<&B> {
        match &self.slots[id.index()] {
            AssetSlot::Ready(bitmap) => Some(bitmap),
            _ => None,
        }
    }

    /// True once no slot is pending. Failed slots count as resolved: they
    /// unblock the state machine and render as placeholders forever.
    pub fn resolved(&self) -> bool {
        self.slots
            .iter()
            .all(|slot| !matches!(slot, AssetSlot::Pending))
    }
}
