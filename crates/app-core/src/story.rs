//! Authored narrative data and the timers that pace its presentation.

use crate::constants::{
    INTRO_BLACK_END, INTRO_FADE_END, INTRO_QUOTE_END, QUOTE_FIRST_DELAY, QUOTE_INTERVAL,
    QUOTE_VISIBLE, REVEAL_FADE_BAND, REVEAL_FULL_BAND,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug)]
pub struct StorySegment {
    pub id: &'static str,
    pub paragraphs: &'static [&'static str],
    pub alignment: Alignment,
}

pub const STORY: &[StorySegment] = &[
    StorySegment {
        id: "intro",
        paragraphs: &["...mungkin hanya aku?"],
        alignment: Alignment::Center,
    },
    StorySegment {
        id: "meeting",
        paragraphs: &[
            "Dulu, aku dan kamu bertemu di persimpangan yang tak pernah menjanjikan arah. Kata orang, tempat itu terlalu gelap untuk sesuatu tumbuh, tapi di sanalah aku melihat sesuatu dalam dirimu.",
            "Kita saling tatap, tak dengan dekat, tapi cukup untuk saling tahu bahwa ada sesuatu di antara dua jiwa yang diam-diam berharap, mungkin hanya aku?.",
        ],
        alignment: Alignment::Left,
    },
    StorySegment {
        id: "realization",
        paragraphs: &[
            "Aku tidak tau caramu diam, pada caramu tetap kuat. Tapi aku tahu, aku dan kamu hanya bisa sejauh ini.",
            "Tak pernah sejajar, tak pernah menyatu atau bahkan saling bertabrakan.",
        ],
        alignment: Alignment::Right,
    },
    StorySegment {
        id: "regret",
        paragraphs: &[
            "Suaramu masih terdengar di kepalaku, bahkan saat kamu tak mengucap apa pun. Aku tahu kamu berjuang, aku tahu kamu menahan banyak luka, dan aku... tidak ada di sana.",
            "Bukan karena tak peduli, tapi karena aku kalah oleh jarak dan takut.",
            "Maaf, aku tidak datang.",
        ],
        alignment: Alignment::Left,
    },
    StorySegment {
        id: "candala",
        paragraphs: &[
            "Andai candala ini bisa kugenggam dan kupatahkan, aku akan melakukannya untukmu.",
            "Tapi semua ini sudah menjadi batas yang tak bisa kutembus.",
        ],
        alignment: Alignment::Center,
    },
    StorySegment {
        id: "resignation",
        paragraphs: &[
            "Aku ingin jadi tempatmu pulang, tapi tak punya rumah untukmu singgah. Dan aku tertinggal di belakang dengan merangkak perlahan.",
            "Tak apa. Yang penting kamu tetap berjalan.",
        ],
        alignment: Alignment::Right,
    },
    StorySegment {
        id: "acceptance",
        paragraphs: &[
            "Hari ini pun rasanya masih sama, hanya kini ada hampa yang lebih nyata.",
            "Aku tetap aku, kamu tetap kamu, tapi kita tidak lagi bisa menyebut diri sebagai \u{2018}kita\u{2019}.",
            "Maaf, dan terima kasih karena pernah ada.",
        ],
        alignment: Alignment::Left,
    },
    StorySegment {
        id: "promise",
        paragraphs: &[
            "Karena selama kamu tetap ada di dunia ini, aku akan selalu jadi laki-laki yang sama\u{2014}yang mengarahkan seluruh harapan baikku padamu dalam diam.",
        ],
        alignment: Alignment::Center,
    },
    StorySegment {
        id: "farewell",
        paragraphs: &[
            "Saat kamu akhirnya menggenggam harapanmu, atau menemukan seseorang yang ingin kamu temani sepanjang waktu, aku akan jadi orang pertama yang merayakannya.",
            "Kamu layak bahagia, kamu layak sampai pada tempat yang kamu impikan.",
        ],
        alignment: Alignment::Right,
    },
    StorySegment {
        id: "closing",
        paragraphs: &[
            "Terima kasih karena sudah pernah ada.",
            "Beberapa hal memang ditakdirkan untuk tumbuh dari kejauhan.",
        ],
        alignment: Alignment::Center,
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[Quote] = &[
    Quote {
        text: "The cosmos is within us. We are made of star-stuff.",
        author: "Carl Sagan",
    },
    Quote {
        text: "Somewhere, something incredible is waiting to be known.",
        author: "Carl Sagan",
    },
    Quote {
        text: "The universe is under no obligation to make sense to you.",
        author: "Neil deGrasse Tyson",
    },
    Quote {
        text: "We are all connected; To each other, biologically. To the earth, chemically. To the rest of the universe atomically.",
        author: "Neil deGrasse Tyson",
    },
    Quote {
        text: "Look up at the stars and not down at your feet.",
        author: "Stephen Hawking",
    },
];

/// Cinematic intro timeline, a pure function of elapsed seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroPhase {
    Black,
    Quote,
    FadeOut,
    Done,
}

pub fn intro_phase(elapsed_sec: f32) -> IntroPhase {
    if elapsed_sec < INTRO_BLACK_END {
        IntroPhase::Black
    } else if elapsed_sec < INTRO_QUOTE_END {
        IntroPhase::Quote
    } else if elapsed_sec < INTRO_FADE_END {
        IntroPhase::FadeOut
    } else {
        IntroPhase::Done
    }
}

/// Floating-quote schedule: first appearance after a long delay, visible
/// for a fixed window, then repeating on a fixed interval. The starting
/// quote is rotated by a per-session offset.
#[derive(Clone, Copy, Debug)]
pub struct QuoteTicker {
    offset: usize,
}

impl QuoteTicker {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub fn visible(&self, elapsed_sec: f32) -> bool {
        if elapsed_sec < QUOTE_FIRST_DELAY {
            return false;
        }
        (elapsed_sec - QUOTE_FIRST_DELAY) % QUOTE_INTERVAL < QUOTE_VISIBLE
    }

    pub fn quote(&self, elapsed_sec: f32) -> &'static Quote {
        let cycle = if elapsed_sec < QUOTE_FIRST_DELAY {
            0
        } else {
            ((elapsed_sec - QUOTE_FIRST_DELAY) / QUOTE_INTERVAL) as usize
        };
        &QUOTES[(self.offset + cycle) % QUOTES.len()]
    }
}

/// Reveal progress for a story section: 1 inside the middle band of the
/// viewport, fading to 0 across the band beyond it.
pub fn reveal_progress(section_top: f32, section_height: f32, viewport_h: f32, scroll_y: f32) -> f32 {
    if viewport_h <= 0.0 {
        return 0.0;
    }
    let center = section_top + section_height * 0.5 - scroll_y;
    let offset = (center - viewport_h * 0.5).abs();
    let full = viewport_h * REVEAL_FULL_BAND;
    let fade = viewport_h * REVEAL_FADE_BAND;
    (1.0 - ((offset - full).max(0.0) / fade)).clamp(0.0, 1.0)
}
