//! Canned coaching replies picked by keyword.

use chess_core::difficulty::Difficulty;
use rand::seq::IndexedRandom;
use rand::Rng;

/// What the replies may mention about the opponent.
#[derive(Debug, Clone, Copy)]
pub struct ChatContext {
    pub games_learned: u64,
    pub difficulty: Difficulty,
}

const OPENING_TIPS: &[&str] = &[
    "Start with 1.e4 or 1.d4: both fight for the centre and lead to open, instructive games.",
    "In the opening, develop knights before bishops and castle early.",
    "Try the Italian Game (1.e4 e5 2.Nf3 Nc6 3.Bc4) to learn classical development.",
];

const TACTIC_TIPS: &[&str] = &[
    "Scan for checks, captures and threats, in that order, every move.",
    "A fork hits two targets at once; knights are especially good at it.",
    "Solve a few puzzles every day to sharpen your tactical vision.",
];

const ENDGAME_TIPS: &[&str] = &[
    "In the endgame the king is a fighting piece. Bring it to the centre.",
    "Passed pawns must be pushed, and rooks belong behind them.",
];

const GENERAL_TIPS: &[&str] = &[
    "Every move should have a purpose. What is your plan for the next few moves?",
    "Control of the centre gives your pieces room to work.",
    "Review your lost games: the mistakes you find are the lessons you keep.",
    "Balance tactics with long-term planning.",
    "Development, centre control and king safety come first.",
];

const HELP_REPLY: &str =
    "Ask me about openings, tactics or endgames, or about how I pick my difficulty.";

fn has_word(message: &str, words: &[&str]) -> bool {
    message
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| words.contains(&token))
}

/// Reply to a chat message. Keywords are matched as lowercase substrings,
/// greetings as whole words. The reply is never empty.
pub fn reply<R: Rng + ?Sized>(message: &str, ctx: ChatContext, rng: &mut R) -> String {
    let lower = message.to_lowercase();
    let pick = |tips: &[&'static str], rng: &mut R| -> String {
        tips.choose(rng).copied().unwrap_or(HELP_REPLY).to_string()
    };

    if lower.contains("opening") {
        pick(OPENING_TIPS, rng)
    } else if lower.contains("tactic") {
        pick(TACTIC_TIPS, rng)
    } else if lower.contains("endgame") {
        pick(ENDGAME_TIPS, rng)
    } else if lower.contains("difficulty") {
        format!(
            "I'm playing at {} level right now, and I adjust it as we play more games.",
            ctx.difficulty
        )
    } else if lower.contains("learn") {
        format!(
            "I've recorded {} games so far. Keep playing and I'll keep taking notes.",
            ctx.games_learned
        )
    } else if lower.contains("help") {
        HELP_REPLY.to_string()
    } else if has_word(&lower, &["hello", "hi", "hey"]) {
        format!("Hello! {} games recorded so far. Ready for another?", ctx.games_learned)
    } else {
        pick(GENERAL_TIPS, rng)
    }
}
