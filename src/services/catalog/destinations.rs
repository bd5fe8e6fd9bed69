use super::{CatalogEntry, Tag};

pub(super) static ENTRIES: &[CatalogEntry] = &[
    CatalogEntry {
        name: "Kyoto",
        country: "Japan",
        subtitle: "Perfect for culture lovers",
        summary: "Immerse yourself in traditional Japanese culture with ancient temples, serene gardens, and authentic tea ceremonies in this historic city. Experience the perfect blend of tradition and modernity.",
        activities: [
            "Visit Fushimi Inari Shrine's thousands of red torii gates",
            "Experience an authentic tea ceremony in Gion",
            "Explore the magical bamboo groves of Arashiyama",
            "Walk through the historic Gion district at night",
        ],
        base_ceiling_usd: 2400.0,
        base_multiplier: 0.9,
        best_time: "Mar - May",
        image_url: "https://images.unsplash.com/photo-1493976040374-85c8e12f0c0e?w=800&q=80",
        tags: &[Tag::Cultural, Tag::City],
    },
    CatalogEntry {
        name: "Santorini",
        country: "Greece",
        subtitle: "Perfect for beach lovers",
        summary: "Experience breathtaking sunsets over the Aegean Sea in this iconic island paradise. White-washed buildings cascade down volcanic cliffs creating postcard-perfect views.",
        activities: [
            "Watch the world-famous sunset from Oia Castle",
            "Explore the ancient ruins of Akrotiri",
            "Wine tasting at traditional volcanic vineyards",
            "Sail around the stunning caldera",
        ],
        base_ceiling_usd: 2800.0,
        base_multiplier: 0.95,
        best_time: "Apr - Oct",
        image_url: "https://images.unsplash.com/photo-1613395877344-13d4a8e0d49e?w=800&q=80",
        tags: &[Tag::Relaxing, Tag::Beaches, Tag::Romantic],
    },
    CatalogEntry {
        name: "Banff",
        country: "Canada",
        subtitle: "Perfect for adventure seekers",
        summary: "Discover pristine mountain landscapes, turquoise lakes, and abundant wildlife in the heart of the Canadian Rockies. A paradise for outdoor enthusiasts.",
        activities: [
            "Hike to the stunning Lake Louise and Moraine Lake",
            "Ride the Banff Gondola for panoramic mountain views",
            "Wildlife spotting in Banff National Park",
            "Relax in the natural Banff Upper Hot Springs",
        ],
        base_ceiling_usd: 2200.0,
        base_multiplier: 0.85,
        best_time: "Jun - Sep",
        image_url: "https://images.unsplash.com/photo-1503614472-8c93d56e92ce?w=800&q=80",
        tags: &[Tag::Adventurous, Tag::Mountains],
    },
    CatalogEntry {
        name: "Bali",
        country: "Indonesia",
        subtitle: "Tropical paradise retreat",
        summary: "Experience the ultimate relaxation in this tropical paradise with pristine beaches, lush rice terraces, and ancient temples. Perfect for unwinding and spiritual renewal.",
        activities: [
            "Visit the iconic Tanah Lot temple at sunset",
            "Explore the Tegalalang rice terraces in Ubud",
            "Relax on the beaches of Seminyak and Nusa Dua",
            "Experience traditional Balinese spa treatments",
        ],
        base_ceiling_usd: 1800.0,
        base_multiplier: 0.75,
        best_time: "Apr - Oct",
        image_url: "https://images.unsplash.com/photo-1537996194471-e657df975ab4?w=800&q=80",
        tags: &[Tag::Relaxing, Tag::Beaches, Tag::Romantic, Tag::Budget],
    },
    CatalogEntry {
        name: "Paris",
        country: "France",
        subtitle: "The city of lights and romance",
        summary: "Fall in love with the timeless charm of Paris. From world-class museums to charming cafés, experience art, culture, and romance in every corner of this magnificent city.",
        activities: [
            "Visit the Eiffel Tower and cruise the Seine River",
            "Explore the Louvre Museum and see the Mona Lisa",
            "Stroll through charming Montmartre neighborhood",
            "Enjoy café culture in the Latin Quarter",
        ],
        base_ceiling_usd: 3200.0,
        base_multiplier: 1.0,
        best_time: "Apr - Jun, Sep - Oct",
        image_url: "https://images.unsplash.com/photo-1502602898657-3e91760cbb34?w=800&q=80",
        tags: &[Tag::Romantic, Tag::Cultural, Tag::City],
    },
    CatalogEntry {
        name: "Queenstown",
        country: "New Zealand",
        subtitle: "The adventure capital of the world",
        summary: "Set on the shores of Lake Wakatipu beneath the Remarkables, Queenstown packs bungy jumps, jet boats, and alpine trails into one small town. Evenings end with fine wine from nearby Central Otago.",
        activities: [
            "Bungy jump from the historic Kawarau Gorge Suspension Bridge",
            "Jet boat through the narrow canyons of the Shotover River",
            "Take a day cruise through Milford Sound",
            "Ride the Skyline Gondola and luge above the lake",
        ],
        base_ceiling_usd: 3000.0,
        base_multiplier: 0.9,
        best_time: "Dec - Feb, Jun - Aug",
        image_url: "https://source.unsplash.com/800x600/?Queenstown%20New%20Zealand%20travel",
        tags: &[Tag::Adventurous, Tag::Mountains],
    },
    CatalogEntry {
        name: "Lisbon",
        country: "Portugal",
        subtitle: "Sunlit hills and soulful fado",
        summary: "Lisbon tumbles down seven hills toward the Tagus River, its tiled facades glowing in the afternoon light. Great food, historic trams, and lively nights come at a gentle price.",
        activities: [
            "Ride historic Tram 28 through the Alfama district",
            "Taste pastéis de nata at the bakery in Belém",
            "Catch a live fado performance in Bairro Alto",
            "Watch the sunset from the Miradouro da Senhora do Monte",
        ],
        base_ceiling_usd: 1900.0,
        base_multiplier: 0.7,
        best_time: "Mar - May, Sep - Oct",
        image_url: "https://source.unsplash.com/800x600/?Lisbon%20Portugal%20travel",
        tags: &[Tag::Cultural, Tag::City, Tag::Budget],
    },
    CatalogEntry {
        name: "Malé Atolls",
        country: "Maldives",
        subtitle: "Overwater villas and turquoise lagoons",
        summary: "Scattered coral islands ringed by impossibly clear water make the Maldives the definitive barefoot escape. Days drift between reef snorkelling, spa treatments, and sandbank picnics.",
        activities: [
            "Snorkel with manta rays at Hanifaru Bay",
            "Dine at an underwater restaurant",
            "Take a sunset dolphin cruise by traditional dhoni",
            "Spend a private afternoon on a sandbank picnic",
        ],
        base_ceiling_usd: 4500.0,
        base_multiplier: 1.0,
        best_time: "Nov - Apr",
        image_url: "https://source.unsplash.com/800x600/?Maldives%20travel",
        tags: &[Tag::Relaxing, Tag::Beaches, Tag::Romantic],
    },
    CatalogEntry {
        name: "Torres del Paine",
        country: "Chile",
        subtitle: "Wild Patagonian trails",
        summary: "Granite towers, glacial lakes, and wind-swept steppe define this remote corner of Patagonia. It is one of the great trekking destinations on earth.",
        activities: [
            "Trek the W Circuit to the base of the three towers",
            "Kayak among icebergs on Grey Lake",
            "Spot guanacos and condors on a wildlife safari",
            "Hike to the French Valley lookout",
        ],
        base_ceiling_usd: 2600.0,
        base_multiplier: 0.85,
        best_time: "Nov - Mar",
        image_url: "https://source.unsplash.com/800x600/?Torres%20del%20Paine%20Chile%20travel",
        tags: &[Tag::Adventurous, Tag::Mountains],
    },
    CatalogEntry {
        name: "Marrakech",
        country: "Morocco",
        subtitle: "A feast for the senses",
        summary: "Marrakech is a maze of spice-scented souks, ornate palaces, and hidden riad courtyards. Step outside the medina and the Atlas Mountains are only a short drive away.",
        activities: [
            "Lose yourself in the souks around Jemaa el-Fnaa",
            "Tour the Bahia Palace and Saadian Tombs",
            "Relax in the gardens of Jardin Majorelle",
            "Take a day trip into the Atlas Mountains",
        ],
        base_ceiling_usd: 1500.0,
        base_multiplier: 0.65,
        best_time: "Mar - May, Oct - Nov",
        image_url: "https://source.unsplash.com/800x600/?Marrakech%20Morocco%20travel",
        tags: &[Tag::Cultural, Tag::City, Tag::Budget],
    },
    CatalogEntry {
        name: "Tulum",
        country: "Mexico",
        subtitle: "Ruins on a Caribbean shoreline",
        summary: "Mayan ruins perch on cliffs above white-sand beaches in laid-back Tulum. Freshwater cenotes and jungle yoga retreats round out a slow, sunny pace.",
        activities: [
            "Explore the clifftop Tulum archaeological site",
            "Swim in Gran Cenote and Dos Ojos",
            "Snorkel the reefs of Sian Ka'an Biosphere Reserve",
            "Unwind at a beachfront yoga retreat",
        ],
        base_ceiling_usd: 1600.0,
        base_multiplier: 0.7,
        best_time: "Nov - Apr",
        image_url: "https://source.unsplash.com/800x600/?Tulum%20Mexico%20travel",
        tags: &[Tag::Relaxing, Tag::Beaches, Tag::Budget],
    },
    CatalogEntry {
        name: "Venice",
        country: "Italy",
        subtitle: "Romance on the canals",
        summary: "Gondolas glide past Gothic palazzi in a city built on water. Venice rewards slow wandering through quiet campi, glass workshops, and candlelit trattorias.",
        activities: [
            "Take a gondola ride along the Grand Canal",
            "Visit St Mark's Basilica and the Doge's Palace",
            "Watch glassblowers at work on Murano",
            "Photograph the colourful houses of Burano",
        ],
        base_ceiling_usd: 2900.0,
        base_multiplier: 0.95,
        best_time: "Apr - Jun, Sep - Oct",
        image_url: "https://source.unsplash.com/800x600/?Venice%20Italy%20travel",
        tags: &[Tag::Romantic, Tag::Cultural, Tag::City],
    },
    CatalogEntry {
        name: "Cusco",
        country: "Peru",
        subtitle: "Gateway to the Inca world",
        summary: "The former Inca capital blends colonial churches with ancient stone walls high in the Andes. It is the starting point for the Sacred Valley and Machu Picchu.",
        activities: [
            "Hike the Inca Trail to Machu Picchu",
            "Explore the terraces of the Sacred Valley",
            "Climb the striped slopes of Rainbow Mountain",
            "Visit the Qorikancha temple and San Pedro Market",
        ],
        base_ceiling_usd: 1700.0,
        base_multiplier: 0.7,
        best_time: "May - Sep",
        image_url: "https://source.unsplash.com/800x600/?Cusco%20Peru%20travel",
        tags: &[Tag::Adventurous, Tag::Cultural, Tag::Mountains, Tag::Budget],
    },
    CatalogEntry {
        name: "Goa",
        country: "India",
        subtitle: "Sun, sand and slow afternoons",
        summary: "Palm-fringed beaches, Portuguese-era churches, and beach shacks serving fresh seafood make Goa India's favourite coastal escape. The pace is easy and the value is excellent.",
        activities: [
            "Laze on the sands of Palolem Beach",
            "Tour the Basilica of Bom Jesus in Old Goa",
            "Browse the Anjuna flea market",
            "Take a spice plantation tour with a traditional lunch",
        ],
        base_ceiling_usd: 1200.0,
        base_multiplier: 0.6,
        best_time: "Nov - Feb",
        image_url: "https://source.unsplash.com/800x600/?Goa%20India%20travel",
        tags: &[Tag::Relaxing, Tag::Beaches, Tag::Budget],
    },
    CatalogEntry {
        name: "Reykjavik",
        country: "Iceland",
        subtitle: "Fire, ice and the northern lights",
        summary: "Iceland's compact capital is the base for glaciers, geysers, and black-sand beaches. Winter brings the aurora while summer brings the midnight sun.",
        activities: [
            "Drive the Golden Circle to Þingvellir, Geysir and Gullfoss",
            "Hunt for the northern lights on a night tour",
            "Soak in the Blue Lagoon geothermal spa",
            "Hike on the Sólheimajökull glacier",
        ],
        base_ceiling_usd: 3400.0,
        base_multiplier: 0.95,
        best_time: "Jun - Aug, Sep - Mar for auroras",
        image_url: "https://source.unsplash.com/800x600/?Reykjavik%20Iceland%20travel",
        tags: &[Tag::Adventurous, Tag::Romantic, Tag::Mountains],
    },
];
