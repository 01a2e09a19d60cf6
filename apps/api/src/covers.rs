use rand::seq::SliceRandom;

/// Company logos bundled with the web client under `/public/covers`.
const COVERS: &[&str] = &[
    "/adobe.png",
    "/amazon.png",
    "/facebook.png",
    "/hostinger.png",
    "/pinterest.png",
    "/quora.png",
    "/reddit.png",
    "/skype.png",
    "/spotify.png",
    "/telegram.png",
    "/tiktok.png",
    "/yahoo.png",
];

/// Picks a random cover-image path for a new interview record.
pub fn random_interview_cover() -> String {
    let mut rng = rand::thread_rng();
    let cover = COVERS.choose(&mut rng).copied().unwrap_or("/adobe.png");
    format!("/covers{cover}")
}
