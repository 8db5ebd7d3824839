// Canonical country crisis table
//
// Row and contact order is significant: the first row is the default country
// and the first contact of each row is its primary contact.

use super::contacts::{ChannelType, CountryCrisisProfile, CrisisContact};

pub(super) static COUNTRY_TABLE: &[CountryCrisisProfile] = &[
    CountryCrisisProfile {
        code: "US",
        country_name: "United States",
        emergency_number: "911",
        contacts: &[
            CrisisContact {
                id: "us-988",
                name: "Suicide & Crisis Lifeline",
                number: "988",
                channel_type: ChannelType::Phone,
                description: "Free and confidential emotional support 24/7",
                availability: "24/7",
                languages: Some("English, Spanish"),
            },
            CrisisContact {
                id: "us-741741",
                name: "Crisis Text Line",
                number: "741741",
                channel_type: ChannelType::Text,
                description: "Text HOME for crisis support",
                availability: "24/7",
                languages: Some("English"),
            },
            CrisisContact {
                id: "us-chat",
                name: "Crisis Chat",
                number: "suicidepreventionlifeline.org/chat",
                channel_type: ChannelType::Chat,
                description: "Online crisis chat support",
                availability: "24/7",
                languages: Some("English"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "CA",
        country_name: "Canada",
        emergency_number: "911",
        contacts: &[
            CrisisContact {
                id: "ca-talk",
                name: "Talk Suicide Canada",
                number: "1-833-456-4566",
                channel_type: ChannelType::Phone,
                description: "National suicide prevention service",
                availability: "24/7",
                languages: Some("English, French"),
            },
            CrisisContact {
                id: "ca-text",
                name: "Crisis Text Line Canada",
                number: "686868",
                channel_type: ChannelType::Text,
                description: "Text TALK for crisis support",
                availability: "24/7",
                languages: Some("English, French"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "GB",
        country_name: "United Kingdom",
        emergency_number: "999",
        contacts: &[
            CrisisContact {
                id: "uk-samaritans",
                name: "Samaritans",
                number: "116 123",
                channel_type: ChannelType::Phone,
                description: "Free emotional support for anyone in distress",
                availability: "24/7",
                languages: Some("English"),
            },
            CrisisContact {
                id: "uk-text",
                name: "Samaritans Text",
                number: "07725 909090",
                channel_type: ChannelType::Text,
                description: "Text support service",
                availability: "24/7",
                languages: Some("English"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "AU",
        country_name: "Australia",
        emergency_number: "000",
        contacts: &[
            CrisisContact {
                id: "au-lifeline",
                name: "Lifeline Australia",
                number: "13 11 14",
                channel_type: ChannelType::Phone,
                description: "Crisis support and suicide prevention",
                availability: "24/7",
                languages: Some("English"),
            },
            CrisisContact {
                id: "au-text",
                name: "Lifeline Text",
                number: "0477 13 11 14",
                channel_type: ChannelType::Text,
                description: "Text crisis support",
                availability: "6PM - 12AM",
                languages: Some("English"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "IN",
        country_name: "India",
        emergency_number: "112",
        contacts: &[
            CrisisContact {
                id: "in-aasra",
                name: "AASRA",
                number: "91-9820466726",
                channel_type: ChannelType::Phone,
                description: "Suicide prevention helpline",
                availability: "24/7",
                languages: Some("English, Hindi"),
            },
            CrisisContact {
                id: "in-sneha",
                name: "SNEHA",
                number: "044-24640050",
                channel_type: ChannelType::Phone,
                description: "Emotional support helpline",
                availability: "24/7",
                languages: Some("English, Tamil"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "DE",
        country_name: "Germany",
        emergency_number: "112",
        contacts: &[
            CrisisContact {
                id: "de-telefonseelsorge",
                name: "Telefonseelsorge",
                number: "0800 111 0 111",
                channel_type: ChannelType::Phone,
                description: "Free crisis counseling",
                availability: "24/7",
                languages: Some("German"),
            },
            CrisisContact {
                id: "de-nummer",
                name: "Nummer gegen Kummer",
                number: "116 111",
                channel_type: ChannelType::Phone,
                description: "Support for children and teens",
                availability: "Mon-Sat 2-8 PM",
                languages: Some("German"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "FR",
        country_name: "France",
        emergency_number: "112",
        contacts: &[
            CrisisContact {
                id: "fr-suicide",
                name: "Suicide Écoute",
                number: "01 45 39 40 00",
                channel_type: ChannelType::Phone,
                description: "National suicide prevention line",
                availability: "24/7",
                languages: Some("French"),
            },
            CrisisContact {
                id: "fr-sos",
                name: "SOS Amitié",
                number: "09 72 39 40 50",
                channel_type: ChannelType::Phone,
                description: "Emotional support and listening",
                availability: "24/7",
                languages: Some("French"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "JP",
        country_name: "Japan",
        emergency_number: "119",
        contacts: &[
            CrisisContact {
                id: "jp-tell",
                name: "TELL Lifeline",
                number: "03-5774-0992",
                channel_type: ChannelType::Phone,
                description: "Crisis support in English",
                availability: "9 AM - 11 PM",
                languages: Some("English, Japanese"),
            },
            CrisisContact {
                id: "jp-inochi",
                name: "Inochi no Denwa",
                number: "0570-783-556",
                channel_type: ChannelType::Phone,
                description: "Suicide prevention hotline",
                availability: "24/7",
                languages: Some("Japanese"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "BR",
        country_name: "Brazil",
        emergency_number: "192",
        contacts: &[
            CrisisContact {
                id: "br-cvv",
                name: "Centro de Valorização da Vida",
                number: "188",
                channel_type: ChannelType::Phone,
                description: "Suicide prevention and emotional support",
                availability: "24/7",
                languages: Some("Portuguese"),
            },
            CrisisContact {
                id: "br-caps",
                name: "CAPS",
                number: "0800-273-8255",
                channel_type: ChannelType::Phone,
                description: "Psychosocial care centers",
                availability: "Business hours",
                languages: Some("Portuguese"),
            },
        ],
    },
    CountryCrisisProfile {
        code: "MX",
        country_name: "Mexico",
        emergency_number: "911",
        contacts: &[
            CrisisContact {
                id: "mx-saptel",
                name: "SAPTEL",
                number: "55 5259 8121",
                channel_type: ChannelType::Phone,
                description: "Crisis intervention and suicide prevention",
                availability: "24/7",
                languages: Some("Spanish"),
            },
            CrisisContact {
                id: "mx-linea",
                name: "Línea de la Vida",
                number: "800 911 2000",
                channel_type: ChannelType::Phone,
                description: "National crisis line",
                availability: "24/7",
                languages: Some("Spanish"),
            },
        ],
    },
];
