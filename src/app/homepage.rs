use leptos::{html, prelude::*};
use leptos_meta::Title;

use super::achievements::Achievements;
use super::components::SectionTitle;
use super::contact::Contact;
use super::footer::Footer;
use super::nav::NavBar;
use super::projects::Projects;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    let hero_ref = NodeRef::<html::Header>::new();

    view! {
        <Title text="Portfolio" />
        <NavBar hero_ref />
        <Hero hero_ref />
        <About />
        <Skills />
        <Projects />
        <Achievements />
        <Contact />
        <Footer />
    }
}

#[component]
fn Hero(hero_ref: NodeRef<html::Header>) -> impl IntoView {
    view! {
        <header
            node_ref=hero_ref
            id="top"
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-blue-100/50 to-purple-100/50"></div>
            <div class="text-center z-10 px-4 animate-fade-in-up">
                <h1 class="text-7xl md:text-9xl font-bold mb-6 bg-clip-text text-transparent bg-gradient-to-r from-gray-900 via-blue-800 to-gray-900">
                    "P Sudarsan"
                </h1>
                <p class="text-2xl md:text-3xl text-gray-600 mb-12 tracking-wide">
                    "Jack of all trades, master of none, but oftentimes better than master of one."
                </p>
            </div>
            <a href="#about" class="absolute bottom-8 animate-bounce" aria-label="Scroll to about">
                <i class="extra-chevron-down text-3xl text-gray-600" />
            </a>
        </header>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-32 bg-white text-gray-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <SectionTitle icon="extra-user" title="About Me" />
                <div class="prose prose-lg lg:prose-xl max-w-4xl mx-auto text-gray-700 section-content">
                    <p>
                        "Hello! I'm P Sudarsan, a passionate developer currently pursuing a B.Tech in Artificial Intelligence & Data Science. I thrive on transforming complex ideas into practical, elegant solutions through code. My journey in tech has equipped me with a diverse skill set, spanning from mobile development with Flutter and Android (Kotlin) to backend logic with Python and PHP."
                    </p>
                    <p>
                        "I have a keen interest in the cutting edge of technology, particularly in AI and Neural Networks, where I enjoy building models like handwriting recognition systems and NLP tools for hate speech detection. My curiosity also extends to cybersecurity, exploring tools like Kali Linux and techniques like password cracking to understand system vulnerabilities better."
                    </p>
                    <p>
                        "Beyond software, I'm comfortable with hardware management and OS installations, giving me a holistic view of computing systems. I'm a strong believer in continuous learning, as demonstrated by my NPTEL Star recognition and certifications from Harvard's CS50 and Google AI. My goal is to leverage technology to create seamless, impactful user experiences and solve real-world problems. Let's build something amazing together!"
                    </p>
                </div>
            </div>
        </section>
    }
}
