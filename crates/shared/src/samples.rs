use rand::{seq::SliceRandom, Rng};

pub const SAMPLE_TEXTS: [&str; 2] = [
    "Artificial intelligence (AI) is intelligence demonstrated by machines, as opposed to natural intelligence displayed by animals including humans. AI research has been defined as the field of study of intelligent agents, which refers to any system that perceives its environment and takes actions that maximize its chance of achieving its goals. The term artificial intelligence is applied when a machine mimics cognitive functions that humans associate with the human mind, such as learning and problem solving. As machines become increasingly capable, tasks considered to require intelligence are often removed from the definition of AI, a phenomenon known as the AI effect.",
    "Climate change refers to long-term shifts in global temperatures and weather patterns. While climate variations are natural, since the 1800s, human activities have been the main driver of climate change, primarily due to the burning of fossil fuels which releases greenhouse gases into the atmosphere. The evidence for rapid climate change is compelling: global temperature rise, warming oceans, shrinking ice sheets, declining Arctic sea ice, glacial retreat, decreased snow cover, sea level rise, and extreme weather events. The consequences affect food security, water resources, human health, and economic stability worldwide.",
];

pub fn pick_sample<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SAMPLE_TEXTS.choose(rng).copied().unwrap_or(SAMPLE_TEXTS[0])
}

pub fn random_sample() -> &'static str {
    pick_sample(&mut rand::thread_rng())
}
