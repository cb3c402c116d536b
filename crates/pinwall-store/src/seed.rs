//! First-run content.
//!
//! When nothing has been stored yet the wall starts with one sample board
//! holding one sample post. The sample is fully deterministic: fixed ids,
//! fixed timestamp, zero likes, every flag cleared.

use chrono::{DateTime, Utc};

use pinwall_shared::{BoardId, PostId};

use crate::models::{Board, Post};

pub const SAMPLE_BOARD_ID: &str = "sample-1";
pub const SAMPLE_POST_ID: &str = "post-1";

/// 2023-07-25T10:00:00Z
const SAMPLE_CREATED_AT_SECS: i64 = 1_690_279_200;

const SAMPLE_IMAGE_URL: &str = "https://images.unsplash.com/photo-1559128010-7c1ad6e1b6a5?ixlib=rb-4.0.3&auto=format&fit=crop&w=1473&q=80";

const SAMPLE_CONTENT: &str = "The Galapagos Islands is a volcanic archipelago in the Pacific Ocean. \
It's considered one of the world's foremost destinations for wildlife-viewing. \
A province of Ecuador, it lies about 1,000km off its coast. Its isolated terrain \
shelters a diversity of plant and animal species, many found nowhere else.";

fn sample_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(SAMPLE_CREATED_AT_SECS, 0).unwrap_or_default()
}

/// The seeded collection: exactly one board with one post.
pub fn sample_boards() -> Vec<Board> {
    let post = Post {
        id: PostId::from(SAMPLE_POST_ID),
        title: "Galapagos Islands, Ecuador".to_string(),
        content: SAMPLE_CONTENT.to_string(),
        image_url: Some(SAMPLE_IMAGE_URL.to_string()),
        likes: 0,
        is_liked: false,
        is_bookmarked: false,
        is_pinned: false,
        created_at: sample_timestamp(),
    };

    vec![Board {
        id: BoardId::from(SAMPLE_BOARD_ID),
        title: "Places to visit".to_string(),
        description: "A collection of amazing places to visit".to_string(),
        color: "bg-sky-50".to_string(),
        text_color: "text-sky-800".to_string(),
        posts: vec![post],
        created_at: sample_timestamp(),
    }]
}
