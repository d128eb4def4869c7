use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use raads_core::models::dimension::Dimension;

/// A single RAADS-R statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u8,
    pub text: String,
    pub dimension: Dimension,
    pub is_reverse_scored: bool,
}

/// Statements phrased in the socially typical direction. Endorsing one of
/// these lowers the trait score.
pub const REVERSE_SCORED_IDS: [u8; 16] = [
    1, 6, 11, 18, 23, 26, 33, 37, 43, 47, 53, 58, 62, 68, 72, 77,
];

pub const SOCIAL_RELATEDNESS_IDS: [u8; 39] = [
    1, 6, 8, 11, 14, 17, 18, 25, 37, 38, 3, 5, 12, 28, 39, 44, 45, 76, 79, 80, 20, 21, 22, 23, 26,
    31, 43, 47, 48, 53, 54, 55, 60, 61, 64, 68, 69, 72, 77,
];

pub const CIRCUMSCRIBED_INTERESTS_IDS: [u8; 14] =
    [9, 13, 24, 30, 32, 40, 41, 50, 52, 56, 63, 70, 75, 78];

pub const LANGUAGE_IDS: [u8; 7] = [2, 7, 27, 35, 58, 66, 15];

pub const SENSORY_MOTOR_IDS: [u8; 20] = [
    10, 19, 4, 33, 34, 36, 46, 71, 16, 29, 42, 49, 51, 57, 59, 62, 65, 67, 73, 74,
];

/// Question ids belonging to a dimension, in source order.
pub fn dimension_members(dimension: Dimension) -> &'static [u8] {
    match dimension {
        Dimension::SocialRelatedness => &SOCIAL_RELATEDNESS_IDS,
        Dimension::CircumscribedInterests => &CIRCUMSCRIBED_INTERESTS_IDS,
        Dimension::Language => &LANGUAGE_IDS,
        Dimension::SensoryMotor => &SENSORY_MOTOR_IDS,
    }
}

/// Look up the dimension a question id belongs to.
pub fn dimension_of(question_id: u8) -> Option<Dimension> {
    Dimension::ALL
        .into_iter()
        .find(|&d| dimension_members(d).contains(&question_id))
}

/// Highest score attainable within a dimension (3 points per member).
pub fn dimension_max(dimension: Dimension) -> u16 {
    dimension_members(dimension).len() as u16 * 3
}

pub fn reverse_scored_ids() -> &'static BTreeSet<u8> {
    static IDS: LazyLock<BTreeSet<u8>> =
        LazyLock::new(|| REVERSE_SCORED_IDS.into_iter().collect());
    &IDS
}

/// The canonical 80-question bank in presentation order.
pub fn question_bank() -> &'static [Question] {
    static BANK: LazyLock<Vec<Question>> = LazyLock::new(|| {
        STATEMENTS
            .iter()
            .map(|&(id, text)| Question {
                id,
                text: text.to_string(),
                // Every id in STATEMENTS appears in exactly one membership list.
                dimension: dimension_of(id)
                    .unwrap_or_else(|| panic!("question {id} has no dimension")),
                is_reverse_scored: reverse_scored_ids().contains(&id),
            })
            .collect()
    });
    &BANK
}

/// Look up a question in the canonical bank.
pub fn question(id: u8) -> Option<&'static Question> {
    question_bank().iter().find(|q| q.id == id)
}

const STATEMENTS: [(u8, &str); 80] = [
    (1, "I am a sympathetic person."),
    (2, "I often use words and phrases from movies and television in conversations."),
    (3, "I am often surprised when others tell me I have been rude."),
    (4, "Sometimes I talk too loudly or too softly, and I am not aware of it."),
    (5, "I often don't know how to act in social situations."),
    (6, "I can 'put myself in other people's shoes.'"),
    (7, "I have a hard time figuring out what some phrases mean, like 'you are the apple of my eye.'"),
    (8, "I only like to talk to people who share my special interests."),
    (9, "I focus on details rather than the overall idea."),
    (10, "I always notice how food feels in my mouth. This is more important to me than how it tastes."),
    (11, "I miss my best friends or family when we are apart for a long time."),
    (12, "Sometimes I offend others by saying what I am thinking, even if I don’t mean to."),
    (13, "I only like to think and talk about a few things that interest me."),
    (14, "I’d rather go out to eat in a restaurant by myself than with someone I know."),
    (15, "I cannot imagine what it would be like to be someone else."),
    (16, "I have been told that I am clumsy or uncoordinated."),
    (17, "Others consider me odd or different."),
    (18, "I understand when friends need to be comforted."),
    (19, "I am very sensitive to the way my clothes feel when I touch them. How they feel is more important to me than how they look."),
    (20, "I like to copy the way certain people speak and act. It helps me appear more normal."),
    (21, "It can be very intimidating for me to talk to more than one person at the same time."),
    (22, "I have to 'act normal' to please other people and make them like me."),
    (23, "Meeting new people is usually easy for me."),
    (24, "I get highly confused when someone interrupts me when I am talking about something I am very interested in."),
    (25, "It is difficult for me to understand how other people are feeling when we are talking."),
    (26, "I like having a conversation with several people, for instance around a dinner table, at school or at work."),
    (27, "I take things too literally, so I often miss what people are trying to say."),
    (28, "It is very difficult for me to understand when someone is embarrassed or jealous."),
    (29, "Some ordinary textures that do not bother others feel very offensive when they touch my skin."),
    (30, "I get extremely upset when the way I like to do things is suddenly changed."),
    (31, "I have never wanted or needed to have what other people call an 'intimate relationship.'"),
    (32, "It is difficult for me to start and stop a conversation. I need to keep going until I am finished."),
    (33, "I speak with a normal rhythm."),
    (34, "The same sound, color or texture can suddenly change from very sensitive to very dull."),
    (35, "The phrase 'I’ve got you under my skin' makes me very uncomfortable."),
    (36, "Sometimes the sound of a word or a high-pitched noise can be painful to my ears."),
    (37, "I am an understanding type of person."),
    (38, "I do not connect with characters in movies and cannot feel what they feel."),
    (39, "I cannot tell when someone is flirting with me."),
    (40, "I can see in my mind in exact detail things that I am interested in."),
    (41, "I keep lists of things that interest me, even when they have no practical use (for example sports statistics, train schedules, calendar dates, historical facts and dates)."),
    (42, "When I feel overwhelmed by my senses, I have to isolate myself to shut them down."),
    (43, "I like to talk things over with my friends."),
    (44, "I cannot tell if someone is interested or bored with what I am saying."),
    (45, "It can be very hard to read someone's face, hand and body movements when they are talking."),
    (46, "The same thing (like clothes or temperatures) can feel very different to me at different times."),
    (47, "I feel very comfortable with dating or being in social situations with others."),
    (48, "I try to be as helpful as I can when other people tell me their personal problems."),
    (49, "I have been told that I have an unusual voice (for example flat, monotone, childish, or high-pitched)."),
    (50, "Sometimes a thought or a subject gets stuck in my mind and I have to talk about it even if no one is interested."),
    (51, "I do certain things with my hands over and over again (like flapping, twirling sticks or strings, waving things by my eyes)."),
    (52, "I have never been interested in what most of the people I know consider interesting."),
    (53, "I am considered a compassionate type of person."),
    (54, "I get along with other people by following a set of specific rules that help me look normal."),
    (55, "It is very difficult for me to work and function in groups."),
    (56, "When I am talking to someone, it is hard to change the subject. If the other person does so, I can get very upset and confused."),
    (57, "Sometimes I have to cover my ears to block out painful noises (like vacuum cleaners or people talking too much or too loudly)."),
    (58, "I can chat and make small talk with people."),
    (59, "Sometimes things that should feel painful are not (for instance when I hurt myself or burn my hand on a stove)."),
    (60, "When talking to someone, I have a hard time telling when it is my turn to talk or to listen."),
    (61, "I am considered a loner by those who know me best."),
    (62, "I usually speak in a normal tone."),
    (63, "I like things to be exactly the same day after day and even small changes in my routines upset me."),
    (64, "How to make friends and socialize is a mystery to me."),
    (65, "It calms me to spin around or to rock in a chair when I am feeling stressed."),
    (66, "The phrase, 'He wears his heart on his sleeve,' does not make sense to me."),
    (67, "If I am in a place where there are many smells, textures to feel, noises or bright lights, I feel anxious or frightened."),
    (68, "I can tell when someone says one thing but means something else."),
    (69, "I like to be by myself as much as I can."),
    (70, "I keep my thoughts stacked in my memory like they are on filing cards, and I pick out the ones I need by looking through the stack and finding the right one (or another unique way)."),
    (71, "The same sound sometimes seems very loud or very soft, even though I know it has not changed."),
    (72, "I enjoy spending time eating and talking with my family and friends."),
    (73, "I can’t tolerate things I dislike (like smells, textures, sounds or colors)."),
    (74, "I don’t like to be hugged or held."),
    (75, "When I go somewhere, I have to follow a familiar route or I can get very confused and upset."),
    (76, "It is difficult to figure out what other people expect of me."),
    (77, "I like to have close friends."),
    (78, "People tell me that I give too much detail."),
    (79, "I am often told that I ask embarrassing questions."),
    (80, "I tend to point out other people's mistakes."),
];
