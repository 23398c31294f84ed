//! Fixed sample timeline shown at startup

use super::attachment::AttachmentRef;
use super::post::{Author, Post, PostId};

/// Display name of the demo's logged-in user
pub const DEFAULT_DISPLAY_NAME: &str = "Tevin Muchiri";
/// Handle of the demo's logged-in user
pub const DEFAULT_HANDLE: &str = "tevin_muchiri";

struct SeedPost {
    id: u32,
    display_name: &'static str,
    handle: &'static str,
    body: &'static str,
    posted_at: &'static str,
    replies: u32,
    reposts: u32,
    likes: u32,
    /// Bundled asset name
    asset: Option<&'static str>,
}

pub fn default_author() -> Author {
    Author::new(DEFAULT_DISPLAY_NAME, DEFAULT_HANDLE)
}

/// The 25 sample posts in display order (ids 1..=25, newest first)
pub fn sample_posts() -> Vec<Post> {
    SEED.iter()
        .map(|seed| Post {
            id: PostId(seed.id),
            author: Author::new(seed.display_name, seed.handle),
            body: seed.body.to_string(),
            posted_at: seed.posted_at.to_string(),
            reply_count: seed.replies,
            repost_count: seed.reposts,
            like_count: seed.likes,
            attachment: seed
                .asset
                .map(|name| AttachmentRef::Bundled(name.to_string())),
        })
        .collect()
}

const SEED: [SeedPost; 25] = [
    SeedPost {
        id: 1,
        display_name: "Dennis Murage",
        handle: "dennismurage",
        body: "Just deployed a microservices architecture using Kubernetes. The scalability is incredible! 🚀 #SoftwareEngineering",
        posted_at: "2h",
        replies: 45,
        reposts: 89,
        likes: 234,
        asset: Some("dennis"),
    },
    SeedPost {
        id: 2,
        display_name: "Vivian Wairimu",
        handle: "vivianwairimu",
        body: "Being a young mum is challenging but so rewarding. Watching my little one grow every day makes it all worth it 💕",
        posted_at: "3h",
        replies: 67,
        reposts: 23,
        likes: 456,
        asset: None,
    },
    SeedPost {
        id: 3,
        display_name: "George Muchiri",
        handle: "georgemuchiri",
        body: "Finally got my dream car! The new BMW M3 is an absolute beast on the road. Can't stop smiling 🚗💨",
        posted_at: "5h",
        replies: 156,
        reposts: 234,
        likes: 892,
        asset: Some("bmw"),
    },
    SeedPost {
        id: 4,
        display_name: "Trevor Onyango",
        handle: "trevoronyango",
        body: "What a match! Arsenal's performance today was outstanding. That last-minute goal had me on my feet! ⚽🔥",
        posted_at: "6h",
        replies: 234,
        reposts: 567,
        likes: 1234,
        asset: None,
    },
    SeedPost {
        id: 5,
        display_name: "Gladys Njeri",
        handle: "gladysnjeri",
        body: "Skincare tip: Always use sunscreen, even on cloudy days! Your skin will thank you in 10 years ☀️✨",
        posted_at: "8h",
        replies: 89,
        reposts: 145,
        likes: 678,
        asset: Some("gladys"),
    },
    SeedPost {
        id: 6,
        display_name: "Favour Mumo",
        handle: "favourmumo",
        body: "Healthy relationships require communication, trust, and effort from both sides. Don't settle for less than you deserve 💯",
        posted_at: "10h",
        replies: 123,
        reposts: 234,
        likes: 891,
        asset: None,
    },
    SeedPost {
        id: 7,
        display_name: "Kelvin Mwaniki",
        handle: "kelvinmwaniki",
        body: "Golden hour photography at Karura Forest today. Nature never disappoints! 📸🌅",
        posted_at: "12h",
        replies: 45,
        reposts: 78,
        likes: 567,
        asset: Some("karura"),
    },
    SeedPost {
        id: 8,
        display_name: "Liz Ndungu",
        handle: "lizndungu",
        body: "Motherhood has taught me patience I never knew I had. Every day is a new adventure with my little ones 👶❤️",
        posted_at: "14h",
        replies: 56,
        reposts: 34,
        likes: 345,
        asset: None,
    },
    SeedPost {
        id: 9,
        display_name: "William Ngiru",
        handle: "williamngiru",
        body: "My German Shepherd just learned a new trick! Dogs are truly man's best friend 🐕💙",
        posted_at: "16h",
        replies: 34,
        reposts: 45,
        likes: 289,
        asset: Some("german_shepherd"),
    },
    SeedPost {
        id: 10,
        display_name: "Eunice Nyaboke",
        handle: "eunicenyaboke",
        body: "The new tax policies need serious reconsideration. We need leaders who actually listen to the people! #KenyanPolitics",
        posted_at: "18h",
        replies: 345,
        reposts: 567,
        likes: 1234,
        asset: None,
    },
    SeedPost {
        id: 11,
        display_name: "Daniel Kamau",
        handle: "danielkamau",
        body: "Just closed my biggest deal yet! Hard work and persistence always pay off. Keep grinding entrepreneurs! 💼📈",
        posted_at: "20h",
        replies: 78,
        reposts: 123,
        likes: 567,
        asset: Some("daniel"),
    },
    SeedPost {
        id: 12,
        display_name: "Sheilla Sigeyh",
        handle: "sheillasigeyh",
        body: "Night shift at the hospital. Being a nurse is tough but saving lives makes every moment worthwhile 🏥💉",
        posted_at: "22h",
        replies: 89,
        reposts: 156,
        likes: 678,
        asset: None,
    },
    SeedPost {
        id: 13,
        display_name: "Margaret Waithera",
        handle: "margaretwaithera",
        body: "First year of marriage complete! It's been a beautiful journey of growth, love, and learning together 💑✨",
        posted_at: "1d",
        replies: 123,
        reposts: 89,
        likes: 892,
        asset: Some("marriage"),
    },
    SeedPost {
        id: 14,
        display_name: "James Mwangi",
        handle: "jamesmwangi",
        body: "Military training builds character and discipline like nothing else. Proud to serve! 🎖️💪",
        posted_at: "1d",
        replies: 67,
        reposts: 234,
        likes: 567,
        asset: None,
    },
    SeedPost {
        id: 15,
        display_name: "Nancy Ouma",
        handle: "nancyouma",
        body: "Investment tip: Diversify your portfolio. Don't put all your eggs in one basket! 📊💰 #FinancialFreedom",
        posted_at: "1d",
        replies: 156,
        reposts: 345,
        likes: 1023,
        asset: None,
    },
    SeedPost {
        id: 16,
        display_name: "Yvonne Wanjiku",
        handle: "yvonnewanjiku",
        body: "Just finished watching 'Crash Landing on You' and I'm emotionally wrecked! K-dramas hit different 😭💕",
        posted_at: "2d",
        replies: 234,
        reposts: 123,
        likes: 789,
        asset: Some("yvonne"),
    },
    SeedPost {
        id: 17,
        display_name: "Terrie Ndanu",
        handle: "terriendanu",
        body: "Harvest season is here! Organic farming is hard work but seeing the fruits of your labor is priceless 🌾🚜",
        posted_at: "2d",
        replies: 45,
        reposts: 67,
        likes: 456,
        asset: None,
    },
    SeedPost {
        id: 18,
        display_name: "Gerald Ouko",
        handle: "geraldouko",
        body: "WWE Royal Rumble predictions: Who's your pick for the winner? My money's on Seth Rollins! 🤼",
        posted_at: "2d",
        replies: 189,
        reposts: 234,
        likes: 891,
        asset: Some("gerald"),
    },
    SeedPost {
        id: 19,
        display_name: "Grace Wambui",
        handle: "gracewambui",
        body: "LPG gas business is booming! Providing clean energy to our community feels amazing. Entrepreneurship at its best! 🔥💼",
        posted_at: "3d",
        replies: 56,
        reposts: 89,
        likes: 567,
        asset: None,
    },
    SeedPost {
        id: 20,
        display_name: "Jaden Muchiri",
        handle: "jadenmuchiri",
        body: "Just hit Diamond rank in Valorant! The grind was real but totally worth it 🎮🏆",
        posted_at: "3d",
        replies: 123,
        reposts: 78,
        likes: 678,
        asset: Some("jaden"),
    },
    SeedPost {
        id: 21,
        display_name: "Nelly Wangui",
        handle: "nellywangui",
        body: "Engineering is not just for men! Ladies, we can build bridges, design systems, and change the world 👷💪",
        posted_at: "3d",
        replies: 234,
        reposts: 456,
        likes: 1234,
        asset: None,
    },
    SeedPost {
        id: 22,
        display_name: "Paul Otieno",
        handle: "paulotieno",
        body: "Mathematics is the language of the universe. Once you understand it, everything else makes sense 📐🧮",
        posted_at: "4d",
        replies: 89,
        reposts: 123,
        likes: 567,
        asset: None,
    },
    SeedPost {
        id: 23,
        display_name: "Sharon Muhindi",
        handle: "sharonmuhindi",
        body: "Fresh juice delivery now available in Nairobi! 100% natural, no preservatives. Support local businesses! 🍊🥤",
        posted_at: "4d",
        replies: 67,
        reposts: 145,
        likes: 456,
        asset: Some("sharon"),
    },
    SeedPost {
        id: 24,
        display_name: "Dennis Meshulam",
        handle: "dennismeshulam",
        body: "Justice delayed is justice denied. Our legal system needs reform to serve the people better ⚖️",
        posted_at: "4d",
        replies: 178,
        reposts: 267,
        likes: 891,
        asset: None,
    },
    SeedPost {
        id: 25,
        display_name: "John Kimathi",
        handle: "johnkimathi",
        body: "Finally got my visa approved! Canada here I come! New chapter, new opportunities 🇨🇦✈️",
        posted_at: "5d",
        replies: 234,
        reposts: 345,
        likes: 1456,
        asset: Some("john"),
    },];
