//! Postoperative rehabilitation protocols
//!
//! One ordered phase list per surgery. Week ranges are inclusive, start at
//! week 0 and are contiguous. A phase only lists the movements it restricts;
//! anything else falls back to the anatomical table. Ceilings follow the
//! published protocols the clinic bases its programs on (MOON for ACL,
//! Brigham and Women's for rotator cuff and Bankart, Willits et al. for
//! Achilles) and are never looser than the anatomical maximum.

use crate::models::{JointMovement, PhaseRomLimit, PostOpPhase, SurgeryType, WeekRange};
use JointMovement::*;

const fn ceiling(
    movement: JointMovement,
    max: f64,
    weight_bearing: bool,
    resistance_allowed: bool,
) -> PhaseRomLimit {
    PhaseRomLimit {
        movement,
        max,
        weight_bearing,
        resistance_allowed,
    }
}

const fn weeks(min: i64, max: i64) -> WeekRange {
    WeekRange { min, max }
}

static ACL_RECONSTRUCTION: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Skyddsfas",
        week_range: weeks(0, 2),
        rom_limits: &[
            ceiling(KneeFlexion, 90.0, true, false),
            ceiling(KneeExtension, 0.0, true, false),
        ],
        restrictions: &[
            "Kryckor med belastning efter förmåga tills gången är normal",
            "Ingen knäextension i öppen kedja mellan 90° och 45°",
            "Undvik vridrörelser och pivotering på det opererade benet",
        ],
        goals: &[
            "Full passiv extension (0°)",
            "Knäflexion till 90°",
            "Minskad svullnad",
            "Raka benlyft utan extensionsdefekt",
        ],
    },
    PostOpPhase {
        phase: 2,
        name: "Tidig rehabilitering",
        week_range: weeks(3, 6),
        rom_limits: &[
            ceiling(KneeFlexion, 120.0, true, true),
            ceiling(KneeExtension, 0.0, true, true),
        ],
        restrictions: &[
            "Ingen löpning eller hopp",
            "Knäextension i öppen kedja endast 90–45° utan extra vikt",
            "Ingen pivotering",
        ],
        goals: &[
            "Knäflexion 120°",
            "Normalt gångmönster utan kryckor",
            "Enbensstående i 30 sekunder",
        ],
    },
    PostOpPhase {
        phase: 3,
        name: "Styrkefas",
        week_range: weeks(7, 12),
        rom_limits: &[ceiling(KneeFlexion, 135.0, true, true)],
        restrictions: &[
            "Ingen löpning före vecka 12 utan klartecken från fysioterapeut",
            "Inga kontaktidrotter",
        ],
        goals: &[
            "Knäflexion i nivå med den friska sidan",
            "Knäböj till 90° med god kontroll",
            "Cykling med motstånd",
        ],
    },
    PostOpPhase {
        phase: 4,
        name: "Löpning och avancerad träning",
        week_range: weeks(13, 23),
        rom_limits: &[],
        restrictions: &[
            "Inga riktningsförändringar i hög fart",
            "Inget matchspel",
        ],
        goals: &[
            "Rak löpning utan smärta eller svullnad",
            "Hoppträning med landningskontroll",
            "LSI ≥ 80 % i styrketester",
        ],
    },
    PostOpPhase {
        phase: 5,
        name: "Återgång till idrott",
        week_range: weeks(24, 52),
        rom_limits: &[],
        restrictions: &["Kontaktidrott först efter godkända return-to-sport-tester"],
        goals: &[
            "LSI ≥ 90 % i styrke- och hopptester",
            "Full idrottsspecifik träning",
            "Fortlöpande skadeförebyggande träning",
        ],
    },
];

static TOTAL_KNEE_REPLACEMENT: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Akut fas",
        week_range: weeks(0, 2),
        rom_limits: &[ceiling(KneeFlexion, 90.0, true, false)],
        restrictions: &[
            "Gånghjälpmedel enligt ordination",
            "Ingen kudde under knät i vila",
            "Undvik knästående",
        ],
        goals: &[
            "Knäflexion 90°",
            "Extensionsdefekt under 10°",
            "Självständig förflyttning",
        ],
    },
    PostOpPhase {
        phase: 2,
        name: "Tidig funktionell fas",
        week_range: weeks(3, 6),
        rom_limits: &[ceiling(KneeFlexion, 110.0, true, true)],
        restrictions: &["Undvik djupa knäböj", "Inga hopp eller löpning"],
        goals: &[
            "Knäflexion 110°",
            "Gång utan hjälpmedel",
            "Växelvis trappgång",
        ],
    },
    PostOpPhase {
        phase: 3,
        name: "Styrke- och funktionsfas",
        week_range: weeks(7, 12),
        rom_limits: &[ceiling(KneeFlexion, 120.0, true, true)],
        restrictions: &[
            "Ingen löpning eller hopp",
            "Undvik knästående på hårt underlag",
        ],
        goals: &[
            "Knäflexion minst 120°",
            "Cykling",
            "Resa sig från låg stol utan armstöd",
        ],
    },
    PostOpPhase {
        phase: 4,
        name: "Återgång till aktivitet",
        week_range: weeks(13, 52),
        rom_limits: &[],
        restrictions: &["Undvik högbelastande idrott med hopp och löpning"],
        goals: &[
            "Golf, simning, cykling och vandring",
            "Bibehållen styrka och rörlighet",
        ],
    },
];

static TOTAL_HIP_REPLACEMENT: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Skyddsfas",
        week_range: weeks(0, 6),
        rom_limits: &[
            ceiling(HipFlexion, 90.0, true, false),
            ceiling(HipAdduction, 0.0, true, false),
            ceiling(HipInternalRotation, 0.0, true, false),
        ],
        restrictions: &[
            "Böj inte höften mer än 90°",
            "Korsa inte benen",
            "Ingen inåtrotation av det opererade benet",
            "Använd förhöjd toalettsits och sittdyna",
        ],
        goals: &[
            "Självständig gång med hjälpmedel",
            "Trappgång med stöd",
            "Aktivering av sätesmuskulaturen",
        ],
    },
    PostOpPhase {
        phase: 2,
        name: "Funktionell fas",
        week_range: weeks(7, 12),
        rom_limits: &[
            ceiling(HipFlexion, 110.0, true, true),
            ceiling(HipAdduction, 15.0, true, true),
            ceiling(HipInternalRotation, 20.0, true, true),
        ],
        restrictions: &["Undvik djupa sittställningar", "Ingen löpning eller hopp"],
        goals: &[
            "Gång utan hjälpmedel",
            "Normaliserad gångbild",
            "Cykling med lätt motstånd",
        ],
    },
    PostOpPhase {
        phase: 3,
        name: "Återgång till aktivitet",
        week_range: weeks(13, 52),
        rom_limits: &[],
        restrictions: &["Undvik kontaktidrott och löpning på hårt underlag"],
        goals: &[
            "Full återgång till vardagsaktiviteter",
            "Simning, cykling och promenader",
        ],
    },
];

static ACHILLES_REPAIR: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Immobilisering",
        week_range: weeks(0, 2),
        rom_limits: &[ceiling(AnkleDorsiflexion, 0.0, false, false)],
        restrictions: &[
            "Gips eller ortos i spetsfotsställning dygnet runt",
            "Ingen belastning utan ortos",
            "Ingen dorsalflexion förbi neutralläget",
        ],
        goals: &[
            "Sårläkning",
            "Kontroll av svullnad",
            "Bibehållen styrka i höft och knä",
        ],
    },
    PostOpPhase {
        phase: 2,
        name: "Skyddad belastning",
        week_range: weeks(3, 6),
        rom_limits: &[
            ceiling(AnkleDorsiflexion, 0.0, true, false),
            ceiling(AnklePlantarflexion, 30.0, true, false),
        ],
        restrictions: &[
            "Belastning endast i ortos med hälkilar",
            "Ingen passiv stretching av vaden",
            "Ingen dorsalflexion förbi neutralläget",
        ],
        goals: &[
            "Full belastning i ortos",
            "Aktiv plantarflexion utan motstånd",
        ],
    },
    PostOpPhase {
        phase: 3,
        name: "Tidig styrka",
        week_range: weeks(7, 12),
        rom_limits: &[
            ceiling(AnkleDorsiflexion, 10.0, true, true),
            ceiling(AnklePlantarflexion, 45.0, true, true),
        ],
        restrictions: &[
            "Ingen stretching av hälsenan",
            "Inga hopp eller löpning",
            "Undvik gång i nedförsbacke",
        ],
        goals: &[
            "Gång i vanliga skor",
            "Tåhävningar på två ben",
            "Dorsalflexion till 10°",
        ],
    },
    PostOpPhase {
        phase: 4,
        name: "Progressiv styrka",
        week_range: weeks(13, 26),
        rom_limits: &[ceiling(AnkleDorsiflexion, 15.0, true, true)],
        restrictions: &[
            "Ingen explosiv hoppträning",
            "Löpning först när 25 tåhävningar på ett ben klaras",
        ],
        goals: &[
            "Tåhävningar på ett ben",
            "Jogging",
            "Symmetrisk dorsalflexion",
        ],
    },
    PostOpPhase {
        phase: 5,
        name: "Återgång till idrott",
        week_range: weeks(27, 52),
        rom_limits: &[],
        restrictions: &["Idrott först efter godkända hopptester"],
        goals: &[
            "LSI ≥ 90 % i tåhävningar och hopp",
            "Full idrottsaktivitet",
        ],
    },
];

static ROTATOR_CUFF_REPAIR: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Passiv fas",
        week_range: weeks(0, 6),
        rom_limits: &[
            ceiling(ShoulderFlexion, 90.0, false, false),
            ceiling(ShoulderAbduction, 60.0, false, false),
            ceiling(ShoulderExternalRotation, 30.0, false, false),
        ],
        restrictions: &[
            "Mitella enligt ordination",
            "Endast passiva rörelser",
            "Inga lyft med den opererade armen",
            "Stöd inte kroppsvikten på armen",
        ],
        goals: &[
            "Passiv flexion 90°",
            "Smärtkontroll",
            "Bibehållen rörlighet i armbåge och hand",
        ],
    },
    PostOpPhase {
        phase: 2,
        name: "Aktiv-assisterad fas",
        week_range: weeks(7, 12),
        rom_limits: &[
            ceiling(ShoulderFlexion, 140.0, false, false),
            ceiling(ShoulderAbduction, 120.0, false, false),
            ceiling(ShoulderExternalRotation, 60.0, false, false),
        ],
        restrictions: &[
            "Inga lyft över 1 kg",
            "Ingen motståndsträning",
            "Undvik snabba rörelser",
        ],
        goals: &[
            "Aktiv flexion 140°",
            "Aktiv utåtrotation 60°",
            "God skulderbladskontroll",
        ],
    },
    PostOpPhase {
        phase: 3,
        name: "Styrkefas",
        week_range: weeks(13, 20),
        rom_limits: &[
            ceiling(ShoulderFlexion, 170.0, true, true),
            ceiling(ShoulderAbduction, 160.0, true, true),
            ceiling(ShoulderExternalRotation, 80.0, true, true),
        ],
        restrictions: &[
            "Inga tunga lyft över axelhöjd",
            "Öka belastningen gradvis",
        ],
        goals: &[
            "Full aktiv rörlighet",
            "Styrka i rotatorcuffen",
            "Vardagsaktiviteter utan smärta",
        ],
    },
    PostOpPhase {
        phase: 4,
        name: "Återgång till full aktivitet",
        week_range: weeks(21, 52),
        rom_limits: &[],
        restrictions: &["Kastidrott och tunga lyft först efter klartecken"],
        goals: &["Full styrka", "Återgång till arbete och idrott"],
    },
];

static BANKART_REPAIR: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Skyddsfas",
        week_range: weeks(0, 4),
        rom_limits: &[
            ceiling(ShoulderExternalRotation, 30.0, false, false),
            ceiling(ShoulderFlexion, 90.0, false, false),
            ceiling(ShoulderAbduction, 45.0, false, false),
        ],
        restrictions: &[
            "Mitella i 3–4 veckor",
            "Ingen utåtrotation förbi 30°",
            "Undvik kombinerad abduktion och utåtrotation",
        ],
        goals: &["Smärtkontroll", "Passiv flexion 90°"],
    },
    PostOpPhase {
        phase: 2,
        name: "Rörlighetsfas",
        week_range: weeks(5, 8),
        rom_limits: &[
            ceiling(ShoulderExternalRotation, 60.0, false, false),
            ceiling(ShoulderFlexion, 150.0, false, false),
            ceiling(ShoulderAbduction, 90.0, false, false),
        ],
        restrictions: &[
            "Ingen utåtrotation i 90° abduktion",
            "Inga kast",
            "Inga lyft över 2 kg",
        ],
        goals: &["Flexion 150°", "Utåtrotation 60°"],
    },
    PostOpPhase {
        phase: 3,
        name: "Styrkefas",
        week_range: weeks(9, 16),
        rom_limits: &[
            ceiling(ShoulderExternalRotation, 80.0, true, true),
            ceiling(ShoulderAbduction, 160.0, true, true),
        ],
        restrictions: &[
            "Inga kontaktidrotter",
            "Ingen kastträning över huvudhöjd",
        ],
        goals: &[
            "Full rörlighet",
            "Styrka i rotatorcuff och skulderbladsmuskulatur",
        ],
    },
    PostOpPhase {
        phase: 4,
        name: "Återgång till idrott",
        week_range: weeks(17, 52),
        rom_limits: &[],
        restrictions: &["Kontaktidrott tidigast efter 4–6 månader och godkända tester"],
        goals: &["Full idrottsspecifik träning", "Symmetrisk styrka"],
    },
];

static MPFL_RECONSTRUCTION: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Skyddsfas",
        week_range: weeks(0, 2),
        rom_limits: &[ceiling(KneeFlexion, 60.0, true, false)],
        restrictions: &[
            "Knäortos låst i extension vid gång",
            "Kryckor tills quadricepskontrollen är god",
            "Undvik att skjuta knäskålen i sidled",
        ],
        goals: &[
            "Knäflexion 60°",
            "Raka benlyft utan extensionsdefekt",
            "Kontroll av svullnad",
        ],
    },
    PostOpPhase {
        phase: 2,
        name: "Tidig rehabilitering",
        week_range: weeks(3, 6),
        rom_limits: &[ceiling(KneeFlexion, 90.0, true, true)],
        restrictions: &["Ingen djup knäböj", "Inga vridrörelser"],
        goals: &["Knäflexion 90°", "Gång utan kryckor och ortos"],
    },
    PostOpPhase {
        phase: 3,
        name: "Styrkefas",
        week_range: weeks(7, 12),
        rom_limits: &[ceiling(KneeFlexion, 130.0, true, true)],
        restrictions: &["Ingen löpning före vecka 12", "Inga hopp"],
        goals: &["Full knäflexion", "Knäböj på ett ben med god kontroll"],
    },
    PostOpPhase {
        phase: 4,
        name: "Återgång till aktivitet",
        week_range: weeks(13, 52),
        rom_limits: &[],
        restrictions: &["Pivoterande idrott först efter godkända funktionstester"],
        goals: &["Löpning och hopp", "LSI ≥ 90 %"],
    },
];

static MENISCUS_REPAIR: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Skyddsfas",
        week_range: weeks(0, 4),
        rom_limits: &[ceiling(KneeFlexion, 90.0, false, false)],
        restrictions: &[
            "Avlastning eller delbelastning med kryckor",
            "Ingen belastad knäböjning",
            "Inga vridrörelser",
        ],
        goals: &["Full extension", "Knäflexion 90°", "Kontroll av svullnad"],
    },
    PostOpPhase {
        phase: 2,
        name: "Belastningsfas",
        week_range: weeks(5, 8),
        rom_limits: &[ceiling(KneeFlexion, 120.0, true, false)],
        restrictions: &[
            "Ingen belastad knäböj över 90°",
            "Inga vridrörelser eller pivotering",
        ],
        goals: &["Full belastning utan kryckor", "Normal gång"],
    },
    PostOpPhase {
        phase: 3,
        name: "Styrkefas",
        week_range: weeks(9, 16),
        rom_limits: &[ceiling(KneeFlexion, 135.0, true, true)],
        restrictions: &[
            "Ingen djup knäböj med belastning",
            "Ingen löpning före vecka 16",
        ],
        goals: &["Full rörlighet", "Styrka i quadriceps och hamstrings"],
    },
    PostOpPhase {
        phase: 4,
        name: "Återgång till idrott",
        week_range: weeks(17, 52),
        rom_limits: &[],
        restrictions: &["Pivoterande idrott först efter godkända tester"],
        goals: &["Löpning, hopp och riktningsförändringar", "LSI ≥ 90 %"],
    },
];

static HIP_ARTHROSCOPY: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Skyddsfas",
        week_range: weeks(0, 3),
        rom_limits: &[
            ceiling(HipFlexion, 90.0, true, false),
            ceiling(HipExtension, 0.0, true, false),
            ceiling(HipExternalRotation, 20.0, true, false),
        ],
        restrictions: &[
            "Delbelastning med kryckor",
            "Ingen höftextension förbi neutralläget",
            "Undvik utåtrotation över 20°",
        ],
        goals: &["Passiv flexion 90°", "Aktivering av sätes- och bålmuskulatur"],
    },
    PostOpPhase {
        phase: 2,
        name: "Rörlighetsfas",
        week_range: weeks(4, 8),
        rom_limits: &[
            ceiling(HipFlexion, 110.0, true, true),
            ceiling(HipExtension, 10.0, true, true),
            ceiling(HipExternalRotation, 35.0, true, true),
        ],
        restrictions: &["Undvik djupa sittställningar", "Ingen löpning"],
        goals: &["Gång utan kryckor", "Höftflexion 110°"],
    },
    PostOpPhase {
        phase: 3,
        name: "Styrkefas",
        week_range: weeks(9, 16),
        rom_limits: &[ceiling(HipFlexion, 120.0, true, true)],
        restrictions: &["Inga explosiva riktningsförändringar"],
        goals: &[
            "Full rörlighet",
            "Knäböj på ett ben med god kontroll",
            "Jogging",
        ],
    },
    PostOpPhase {
        phase: 4,
        name: "Återgång till idrott",
        week_range: weeks(17, 52),
        rom_limits: &[],
        restrictions: &["Kontaktidrott först efter godkända tester"],
        goals: &["Full idrottsaktivitet"],
    },
];

static ANKLE_ORIF: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Immobilisering",
        week_range: weeks(0, 2),
        rom_limits: &[
            ceiling(AnkleDorsiflexion, 0.0, false, false),
            ceiling(AnklePlantarflexion, 0.0, false, false),
        ],
        restrictions: &[
            "Gips eller ortos",
            "Ingen belastning",
            "Högläge för att minska svullnad",
        ],
        goals: &["Sårläkning", "Kontroll av svullnad"],
    },
    PostOpPhase {
        phase: 2,
        name: "Tidig rörlighet",
        week_range: weeks(3, 6),
        rom_limits: &[
            ceiling(AnkleDorsiflexion, 10.0, false, false),
            ceiling(AnklePlantarflexion, 30.0, false, false),
            ceiling(AnkleInversion, 10.0, false, false),
            ceiling(AnkleEversion, 5.0, false, false),
        ],
        restrictions: &[
            "Delbelastning enligt ordination",
            "Inga motståndsövningar",
        ],
        goals: &["Aktiv rörlighet utan smärta", "Dorsalflexion 10°"],
    },
    PostOpPhase {
        phase: 3,
        name: "Belastningsfas",
        week_range: weeks(7, 12),
        rom_limits: &[
            ceiling(AnkleDorsiflexion, 15.0, true, true),
            ceiling(AnkleInversion, 25.0, true, true),
        ],
        restrictions: &["Ingen löpning eller hopp", "Undvik ojämnt underlag"],
        goals: &["Full belastning", "Normal gång", "Balans på ett ben"],
    },
    PostOpPhase {
        phase: 4,
        name: "Återgång till aktivitet",
        week_range: weeks(13, 52),
        rom_limits: &[],
        restrictions: &["Hopp och löpning efter klartecken"],
        goals: &["Full rörlighet och styrka"],
    },
];

static LUMBAR_FUSION: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Skyddsfas",
        week_range: weeks(0, 6),
        rom_limits: &[
            ceiling(LumbarFlexion, 20.0, true, false),
            ceiling(LumbarExtension, 10.0, true, false),
            ceiling(LumbarLateralFlexion, 10.0, true, false),
        ],
        restrictions: &[
            "Inga lyft över 5 kg",
            "Undvik att böja, lyfta och vrida samtidigt",
            "Undvik att sitta mer än 30 minuter i taget",
        ],
        goals: &["Daglig gång", "Självständighet i vardagen"],
    },
    PostOpPhase {
        phase: 2,
        name: "Tidig stabilitet",
        week_range: weeks(7, 12),
        rom_limits: &[
            ceiling(LumbarFlexion, 40.0, true, true),
            ceiling(LumbarExtension, 15.0, true, true),
            ceiling(LumbarLateralFlexion, 15.0, true, true),
        ],
        restrictions: &["Inga tunga lyft", "Inga rotationsövningar med belastning"],
        goals: &["Bålstabilitet", "Gång i 30 minuter"],
    },
    PostOpPhase {
        phase: 3,
        name: "Styrkefas",
        week_range: weeks(13, 26),
        rom_limits: &[ceiling(LumbarFlexion, 50.0, true, true)],
        restrictions: &["Öka lyften gradvis", "Ingen kontaktidrott"],
        goals: &["Återgång till lätt arbete", "Bålstyrka"],
    },
    PostOpPhase {
        phase: 4,
        name: "Återgång till full aktivitet",
        week_range: weeks(27, 52),
        rom_limits: &[],
        restrictions: &["Tunga lyft enligt ergonomiska principer"],
        goals: &["Full återgång till arbete och fritid"],
    },
];

static CERVICAL_FUSION: &[PostOpPhase] = &[
    PostOpPhase {
        phase: 1,
        name: "Skyddsfas",
        week_range: weeks(0, 6),
        rom_limits: &[
            ceiling(CervicalFlexion, 20.0, true, false),
            ceiling(CervicalExtension, 20.0, true, false),
            ceiling(CervicalRotation, 30.0, true, false),
            ceiling(CervicalLateralFlexion, 15.0, true, false),
        ],
        restrictions: &[
            "Halskrage enligt ordination",
            "Inga lyft över 2–3 kg",
            "Undvik arbete över huvudhöjd",
        ],
        goals: &["Smärtkontroll", "Daglig gång"],
    },
    PostOpPhase {
        phase: 2,
        name: "Rörlighetsfas",
        week_range: weeks(7, 12),
        rom_limits: &[
            ceiling(CervicalFlexion, 35.0, true, true),
            ceiling(CervicalExtension, 40.0, true, true),
            ceiling(CervicalRotation, 60.0, true, true),
            ceiling(CervicalLateralFlexion, 30.0, true, true),
        ],
        restrictions: &[
            "Undvik ytterlägen i nacken",
            "Ingen bilkörning utan klartecken",
        ],
        goals: &["Rotation 60° åt båda håll", "Hållningskontroll"],
    },
    PostOpPhase {
        phase: 3,
        name: "Återgång till aktivitet",
        week_range: weeks(13, 52),
        rom_limits: &[],
        restrictions: &["Kontaktidrott efter klartecken från operatören"],
        goals: &["Full funktion i vardag och arbete"],
    },
];

/// Ordered phase list for a surgery
pub fn phases(surgery: SurgeryType) -> &'static [PostOpPhase] {
    match surgery {
        SurgeryType::AclReconstruction => ACL_RECONSTRUCTION,
        SurgeryType::TotalKneeReplacement => TOTAL_KNEE_REPLACEMENT,
        SurgeryType::TotalHipReplacement => TOTAL_HIP_REPLACEMENT,
        SurgeryType::AchillesRepair => ACHILLES_REPAIR,
        SurgeryType::RotatorCuffRepair => ROTATOR_CUFF_REPAIR,
        SurgeryType::BankartRepair => BANKART_REPAIR,
        SurgeryType::MpflReconstruction => MPFL_RECONSTRUCTION,
        SurgeryType::MeniscusRepair => MENISCUS_REPAIR,
        SurgeryType::HipArthroscopy => HIP_ARTHROSCOPY,
        SurgeryType::AnkleOrif => ANKLE_ORIF,
        SurgeryType::LumbarFusion => LUMBAR_FUSION,
        SurgeryType::CervicalFusion => CERVICAL_FUSION,
    }
}
