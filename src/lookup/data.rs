// запечено ideographset_bakery по UCD 15.1.0

use super::IdeographSet;

pub const UNICODE_VERSION: (u64, u64, u64) = (15, 1, 0);

pub const IDEOGRAPHSET_LIST: &[(u32, u32, IdeographSet)] = &[
    (0x0000, 0x2E7F, IdeographSet::Other), (0x2E80, 0x2E99, IdeographSet::CJKRadicalAndComponent),
    (0x2E9A, 0x2E9A, IdeographSet::Other), (0x2E9B, 0x2EF3, IdeographSet::CJKRadicalAndComponent),
    (0x2EF4, 0x2EFF, IdeographSet::Other), (0x2F00, 0x2FD5, IdeographSet::CJKRadicalAndComponent),
    (0x2FD6, 0x3004, IdeographSet::Other), (0x3005, 0x3005, IdeographSet::Other),
    (0x3006, 0x3006, IdeographSet::CJKSpecialIdeograph), (0x3007, 0x3007, IdeographSet::CJKSpecialIdeograph),
    (0x3008, 0x3020, IdeographSet::Other), (0x3021, 0x3029, IdeographSet::CJKSpecialIdeograph),
    (0x302A, 0x3037, IdeographSet::Other), (0x3038, 0x303A, IdeographSet::CJKSpecialIdeograph),
    (0x303B, 0x303B, IdeographSet::Other), (0x303C, 0x33FF, IdeographSet::Other),
    (0x3400, 0x4DBF, IdeographSet::OtherCJKUnifiedIdeograph), (0x4DC0, 0x4DFF, IdeographSet::Other),
    (0x4E00, 0x9FFF, IdeographSet::OtherCJKUnifiedIdeograph), (0xA000, 0xF8FF, IdeographSet::Other),
    (0xF900, 0xFA0D, IdeographSet::CJKCompatIdeograph), (0xFA0E, 0xFA0F, IdeographSet::OtherCJKUnifiedIdeograph),
    (0xFA10, 0xFA10, IdeographSet::CJKCompatIdeograph), (0xFA11, 0xFA11, IdeographSet::OtherCJKUnifiedIdeograph),
    (0xFA12, 0xFA12, IdeographSet::CJKCompatIdeograph), (0xFA13, 0xFA14, IdeographSet::OtherCJKUnifiedIdeograph),
    (0xFA15, 0xFA1E, IdeographSet::CJKCompatIdeograph), (0xFA1F, 0xFA1F, IdeographSet::OtherCJKUnifiedIdeograph),
    (0xFA20, 0xFA20, IdeographSet::CJKCompatIdeograph), (0xFA21, 0xFA21, IdeographSet::OtherCJKUnifiedIdeograph),
    (0xFA22, 0xFA22, IdeographSet::CJKCompatIdeograph), (0xFA23, 0xFA24, IdeographSet::OtherCJKUnifiedIdeograph),
    (0xFA25, 0xFA26, IdeographSet::CJKCompatIdeograph), (0xFA27, 0xFA29, IdeographSet::OtherCJKUnifiedIdeograph),
    (0xFA2A, 0xFA6D, IdeographSet::CJKCompatIdeograph), (0xFA6E, 0xFA6F, IdeographSet::Other),
    (0xFA70, 0xFAD9, IdeographSet::CJKCompatIdeograph), (0xFADA, 0x16FDF, IdeographSet::Other),
    (0x16FE0, 0x16FE0, IdeographSet::Other), (0x16FE1, 0x16FE1, IdeographSet::Other),
    (0x16FE2, 0x16FE3, IdeographSet::Other), (0x16FE4, 0x16FE4, IdeographSet::Other),
    (0x16FE5, 0x16FEF, IdeographSet::Other), (0x16FF0, 0x16FF1, IdeographSet::Other),
    (0x16FF2, 0x16FFF, IdeographSet::Other), (0x17000, 0x187F7, IdeographSet::TangutIdeograph),
    (0x187F8, 0x187FF, IdeographSet::Other), (0x18800, 0x18AFF, IdeographSet::TangutRadicalAndComponent),
    (0x18B00, 0x18CD5, IdeographSet::KhitanSmallScriptIdeograph), (0x18CD6, 0x18CFF, IdeographSet::Other),
    (0x18D00, 0x18D08, IdeographSet::TangutIdeograph), (0x18D09, 0x1B16F, IdeographSet::Other),
    (0x1B170, 0x1B2FB, IdeographSet::NushuIdeograph), (0x1B2FC, 0x1FFFF, IdeographSet::Other),
    (0x20000, 0x2A6DF, IdeographSet::OtherCJKUnifiedIdeograph), (0x2A6E0, 0x2A6FF, IdeographSet::Other),
    (0x2A700, 0x2B739, IdeographSet::OtherCJKUnifiedIdeograph), (0x2B73A, 0x2B73F, IdeographSet::Other),
    (0x2B740, 0x2B81D, IdeographSet::OtherCJKUnifiedIdeograph), (0x2B81E, 0x2B81F, IdeographSet::Other),
    (0x2B820, 0x2CEA1, IdeographSet::OtherCJKUnifiedIdeograph), (0x2CEA2, 0x2CEAF, IdeographSet::Other),
    (0x2CEB0, 0x2EBE0, IdeographSet::OtherCJKUnifiedIdeograph), (0x2EBE1, 0x2EBEF, IdeographSet::Other),
    (0x2EBF0, 0x2EE5D, IdeographSet::OtherCJKUnifiedIdeograph), (0x2EE5E, 0x2F7FF, IdeographSet::Other),
    (0x2F800, 0x2FA1D, IdeographSet::CJKCompatIdeograph), (0x2FA1E, 0x2FFFF, IdeographSet::Other),
    (0x30000, 0x3134A, IdeographSet::OtherCJKUnifiedIdeograph), (0x3134B, 0x3134F, IdeographSet::Other),
    (0x31350, 0x323AF, IdeographSet::OtherCJKUnifiedIdeograph), (0x323B0, 0x10FFFF, IdeographSet::Other),
];
