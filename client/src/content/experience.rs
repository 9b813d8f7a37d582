//! Experience timeline copy.

use super::Localized;

#[derive(Debug)]
pub struct ExperienceItem {
    pub role: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub achievements: &'static [&'static str],
}

#[derive(Debug)]
pub struct ExperienceCopy {
    pub heading: &'static str,
    pub intro: &'static str,
    pub callout_title: &'static str,
    pub callout_body: &'static str,
    pub callout_cta: &'static str,
    pub callout_href: &'static str,
    pub experiences: &'static [ExperienceItem],
}

pub static EXPERIENCE: Localized<ExperienceCopy> = Localized {
    en: ExperienceCopy {
        heading: "Experience Timeline",
        intro: "My experience blends academic rigor with hands-on prototyping. I gravitate toward multidisciplinary \
                teams and love the challenge of balancing technical excellence with creative ambition.",
        callout_title: "Let's build something great",
        callout_body: "I'm excited about roles where I can keep blending gameplay programming with AI-driven systems. \
                       If that sounds like your team, feel free to reach out directly at",
        callout_cta: "semih.bic.er@hotmail.com",
        callout_href: "mailto:semih.bic.er@hotmail.com",
        experiences: &[
            ExperienceItem {
                role: "Independent Game Developer",
                company: "Self-Directed Projects",
                period: "2022 – Present",
                location: "Remote",
                achievements: &[
                    "Prototype and ship Unity games with bespoke input, physics, and camera systems.",
                    "Collaborate with artists and designers to iterate on core loops and player onboarding.",
                    "Profile builds regularly, resolving frame spikes and GC pressure before release.",
                ],
            },
            ExperienceItem {
                role: "Computer Engineering Student",
                company: "Pamukkale University",
                period: "2024 – Present",
                location: "Denizli, Türkiye",
                achievements: &[
                    "Lead team coursework around data structures, algorithms, and software engineering principles.",
                    "Explore reinforcement learning concepts to support AI-driven game mechanics.",
                    "Facilitate study groups focused on modern C++, debugging, and clean architecture.",
                ],
            },
            ExperienceItem {
                role: "ML & Data Enthusiast",
                company: "Open-source & Kaggle Practice",
                period: "2023 – Present",
                location: "Remote",
                achievements: &[
                    "Build exploratory notebooks to evaluate model accuracy and visualize insights for stakeholders.",
                    "Automate data preparation workflows using pandas, NumPy, and lightweight pipelines.",
                    "Integrate prototype ML systems into gameplay concepts to inform adaptive difficulty.",
                ],
            },
        ],
    },
    tr: ExperienceCopy {
        heading: "Deneyim Zaman Çizelgesi",
        intro: "Deneyimim; akademik titizlik ile sahadaki prototiplemeyi birleştiriyor. Disiplinler arası ekiplerde \
                çalışmayı seviyor ve teknik mükemmeliyet ile yaratıcı vizyonu dengeleme zorluklarından keyif \
                alıyorum.",
        callout_title: "Birlikte harika işler çıkaralım",
        callout_body: "Oynanış programlamasını yapay zekâ tabanlı sistemlerle harmanlayabildiğim roller beni \
                       heyecanlandırıyor. Ekibinizin ihtiyaçları bunlara uyuyorsa benimle doğrudan iletişime \
                       geçebilirsiniz:",
        callout_cta: "semih.bic.er@hotmail.com",
        callout_href: "mailto:semih.bic.er@hotmail.com",
        experiences: &[
            ExperienceItem {
                role: "Bağımsız Oyun Geliştiricisi",
                company: "Kişisel Projeler",
                period: "2022 – Günümüz",
                location: "Uzaktan",
                achievements: &[
                    "Unity ile özel girdi, fizik ve kamera sistemlerine sahip oyun prototipleri üretip yayınladım.",
                    "Sanatçılar ve tasarımcılarla iş birliği yaparak temel döngüler ve oyuncu onboarding adımlarını \
                     iyileştirdim.",
                    "Yayın öncesi kare zamanı düşüşlerini ve GC baskısını gidermek için düzenli profil çıkarma yaptım.",
                ],
            },
            ExperienceItem {
                role: "Bilgisayar Mühendisliği Öğrencisi",
                company: "Pamukkale Üniversitesi",
                period: "2024 – Günümüz",
                location: "Denizli, Türkiye",
                achievements: &[
                    "Veri yapıları, algoritmalar ve yazılım mühendisliği derslerinde ekip çalışmalarına liderlik ettim.",
                    "Yapay zekâ destekli oynanış mekaniğine katkı sağlamak için pekiştirmeli öğrenme kavramlarını \
                     araştırdım.",
                    "Modern C++, hata ayıklama ve temiz mimari odaklı çalışma gruplarını yönettim.",
                ],
            },
            ExperienceItem {
                role: "ML & Veri Meraklısı",
                company: "Açık Kaynak & Kaggle Çalışmaları",
                period: "2023 – Günümüz",
                location: "Uzaktan",
                achievements: &[
                    "Model doğruluğunu değerlendirmek ve içgörüleri görselleştirmek için keşifsel notebooklar hazırladım.",
                    "Pandas, NumPy ve hafif akışlar kullanarak veri hazırlama süreçlerini otomatikleştirdim.",
                    "Uyarlanabilir zorluk için prototip makine öğrenmesi sistemlerini oynanış konseptlerine entegre \
                     ettim.",
                ],
            },
        ],
    },
};
