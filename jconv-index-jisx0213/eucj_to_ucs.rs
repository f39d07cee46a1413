// This is a part of jconv.
//
// Any copyright is dedicated to the Public Domain.
// https://creativecommons.org/publicdomain/zero/1.0/
//
// AUTOGENERATED from the JIS X 0213:2004 / Unicode correspondence
// by gen_index.py. Do not edit directly.


/// Maps a JIS X 0213 plane-1 character (`[A1-FE] [A1-FE]`) to Unicode.
///
/// Returns 0 for an unassigned cell, a Unicode scalar value, or a packed
/// base-plus-combining-mark pair `(base << 16) | mark` (always `>= 0x110000`).
#[inline]
pub fn plane1(lead: u8, trail: u8) -> u32 {
    PLANE1[(lead - 0xa1) as usize][(trail - 0xa1) as usize]
}

/// Maps a JIS X 0213 plane-2 character (`8F [A1-FE] [A1-FE]`) to Unicode.
///
/// Returns 0 both for unassigned cells and for rows that belong to
/// JIS X 0212 rather than JIS X 0213 plane 2. Entry values are as in
/// [`plane1`].
#[inline]
pub fn plane2(lead: u8, trail: u8) -> u32 {
    match PLANE2_ROW_INDEX[(lead - 0xa1) as usize] {
        0 => 0,
        i => PLANE2[(i - 1) as usize][(trail - 0xa1) as usize],
    }
}

static PLANE1: [[u32; 94]; 94] = [
    [
        0x00003000, 0x00003001, 0x00003002, 0x0000ff0c, 0x0000ff0e, 0x000030fb, 0x0000ff1a, 0x0000ff1b,
        0x0000ff1f, 0x0000ff01, 0x0000309b, 0x0000309c, 0x000000b4, 0x0000ff40, 0x000000a8, 0x0000ff3e,
        0x0000ffe3, 0x0000ff3f, 0x000030fd, 0x000030fe, 0x0000309d, 0x0000309e, 0x00003003, 0x00004edd,
        0x00003005, 0x00003006, 0x00003007, 0x000030fc, 0x00002015, 0x00002010, 0x0000ff0f, 0x0000ff3c,
        0x0000301c, 0x00002016, 0x0000ff5c, 0x00002026, 0x00002025, 0x00002018, 0x00002019, 0x0000201c,
        0x0000201d, 0x0000ff08, 0x0000ff09, 0x00003014, 0x00003015, 0x0000ff3b, 0x0000ff3d, 0x0000ff5b,
        0x0000ff5d, 0x00003008, 0x00003009, 0x0000300a, 0x0000300b, 0x0000300c, 0x0000300d, 0x0000300e,
        0x0000300f, 0x00003010, 0x00003011, 0x0000ff0b, 0x00002212, 0x000000b1, 0x000000d7, 0x000000f7,
        0x0000ff1d, 0x00002260, 0x0000ff1c, 0x0000ff1e, 0x00002266, 0x00002267, 0x0000221e, 0x00002234,
        0x00002642, 0x00002640, 0x000000b0, 0x00002032, 0x00002033, 0x00002103, 0x0000ffe5, 0x0000ff04,
        0x000000a2, 0x000000a3, 0x0000ff05, 0x0000ff03, 0x0000ff06, 0x0000ff0a, 0x0000ff20, 0x000000a7,
        0x00002606, 0x00002605, 0x000025cb, 0x000025cf, 0x000025ce, 0x000025c7,
    ],
    [
        0x000025c6, 0x000025a1, 0x000025a0, 0x000025b3, 0x000025b2, 0x000025bd, 0x000025bc, 0x0000203b,
        0x00003012, 0x00002192, 0x00002190, 0x00002191, 0x00002193, 0x00003013, 0x0000ff07, 0x0000ff02,
        0x0000ff0d, 0x0000ff5e, 0x00003033, 0x00003034, 0x00003035, 0x0000303b, 0x0000303c, 0x000030ff,
        0x0000309f, 0x00002208, 0x0000220b, 0x00002286, 0x00002287, 0x00002282, 0x00002283, 0x0000222a,
        0x00002229, 0x00002284, 0x00002285, 0x0000228a, 0x0000228b, 0x00002209, 0x00002205, 0x00002305,
        0x00002306, 0x00002227, 0x00002228, 0x000000ac, 0x000021d2, 0x000021d4, 0x00002200, 0x00002203,
        0x00002295, 0x00002296, 0x00002297, 0x00002225, 0x00002226, 0x00002985, 0x00002986, 0x00003018,
        0x00003019, 0x00003016, 0x00003017, 0x00002220, 0x000022a5, 0x00002312, 0x00002202, 0x00002207,
        0x00002261, 0x00002252, 0x0000226a, 0x0000226b, 0x0000221a, 0x0000223d, 0x0000221d, 0x00002235,
        0x0000222b, 0x0000222c, 0x00002262, 0x00002243, 0x00002245, 0x00002248, 0x00002276, 0x00002277,
        0x00002194, 0x0000212b, 0x00002030, 0x0000266f, 0x0000266d, 0x0000266a, 0x00002020, 0x00002021,
        0x000000b6, 0x0000266e, 0x0000266b, 0x0000266c, 0x00002669, 0x000025ef,
    ],
    [
        0x000025b7, 0x000025b6, 0x000025c1, 0x000025c0, 0x00002197, 0x00002198, 0x00002196, 0x00002199,
        0x000021c4, 0x000021e8, 0x000021e6, 0x000021e7, 0x000021e9, 0x00002934, 0x00002935, 0x0000ff10,
        0x0000ff11, 0x0000ff12, 0x0000ff13, 0x0000ff14, 0x0000ff15, 0x0000ff16, 0x0000ff17, 0x0000ff18,
        0x0000ff19, 0x000029bf, 0x000025c9, 0x0000303d, 0x0000fe46, 0x0000fe45, 0x000025e6, 0x00002022,
        0x0000ff21, 0x0000ff22, 0x0000ff23, 0x0000ff24, 0x0000ff25, 0x0000ff26, 0x0000ff27, 0x0000ff28,
        0x0000ff29, 0x0000ff2a, 0x0000ff2b, 0x0000ff2c, 0x0000ff2d, 0x0000ff2e, 0x0000ff2f, 0x0000ff30,
        0x0000ff31, 0x0000ff32, 0x0000ff33, 0x0000ff34, 0x0000ff35, 0x0000ff36, 0x0000ff37, 0x0000ff38,
        0x0000ff39, 0x0000ff3a, 0x00002213, 0x00002135, 0x0000210f, 0x000033cb, 0x00002113, 0x00002127,
        0x0000ff41, 0x0000ff42, 0x0000ff43, 0x0000ff44, 0x0000ff45, 0x0000ff46, 0x0000ff47, 0x0000ff48,
        0x0000ff49, 0x0000ff4a, 0x0000ff4b, 0x0000ff4c, 0x0000ff4d, 0x0000ff4e, 0x0000ff4f, 0x0000ff50,
        0x0000ff51, 0x0000ff52, 0x0000ff53, 0x0000ff54, 0x0000ff55, 0x0000ff56, 0x0000ff57, 0x0000ff58,
        0x0000ff59, 0x0000ff5a, 0x000030a0, 0x00002013, 0x000029fa, 0x000029fb,
    ],
    [
        0x00003041, 0x00003042, 0x00003043, 0x00003044, 0x00003045, 0x00003046, 0x00003047, 0x00003048,
        0x00003049, 0x0000304a, 0x0000304b, 0x0000304c, 0x0000304d, 0x0000304e, 0x0000304f, 0x00003050,
        0x00003051, 0x00003052, 0x00003053, 0x00003054, 0x00003055, 0x00003056, 0x00003057, 0x00003058,
        0x00003059, 0x0000305a, 0x0000305b, 0x0000305c, 0x0000305d, 0x0000305e, 0x0000305f, 0x00003060,
        0x00003061, 0x00003062, 0x00003063, 0x00003064, 0x00003065, 0x00003066, 0x00003067, 0x00003068,
        0x00003069, 0x0000306a, 0x0000306b, 0x0000306c, 0x0000306d, 0x0000306e, 0x0000306f, 0x00003070,
        0x00003071, 0x00003072, 0x00003073, 0x00003074, 0x00003075, 0x00003076, 0x00003077, 0x00003078,
        0x00003079, 0x0000307a, 0x0000307b, 0x0000307c, 0x0000307d, 0x0000307e, 0x0000307f, 0x00003080,
        0x00003081, 0x00003082, 0x00003083, 0x00003084, 0x00003085, 0x00003086, 0x00003087, 0x00003088,
        0x00003089, 0x0000308a, 0x0000308b, 0x0000308c, 0x0000308d, 0x0000308e, 0x0000308f, 0x00003090,
        0x00003091, 0x00003092, 0x00003093, 0x00003094, 0x00003095, 0x00003096, 0x304b309a, 0x304d309a,
        0x304f309a, 0x3051309a, 0x3053309a, 0x00000000, 0x00000000, 0x00000000,
    ],
    [
        0x000030a1, 0x000030a2, 0x000030a3, 0x000030a4, 0x000030a5, 0x000030a6, 0x000030a7, 0x000030a8,
        0x000030a9, 0x000030aa, 0x000030ab, 0x000030ac, 0x000030ad, 0x000030ae, 0x000030af, 0x000030b0,
        0x000030b1, 0x000030b2, 0x000030b3, 0x000030b4, 0x000030b5, 0x000030b6, 0x000030b7, 0x000030b8,
        0x000030b9, 0x000030ba, 0x000030bb, 0x000030bc, 0x000030bd, 0x000030be, 0x000030bf, 0x000030c0,
        0x000030c1, 0x000030c2, 0x000030c3, 0x000030c4, 0x000030c5, 0x000030c6, 0x000030c7, 0x000030c8,
        0x000030c9, 0x000030ca, 0x000030cb, 0x000030cc, 0x000030cd, 0x000030ce, 0x000030cf, 0x000030d0,
        0x000030d1, 0x000030d2, 0x000030d3, 0x000030d4, 0x000030d5, 0x000030d6, 0x000030d7, 0x000030d8,
        0x000030d9, 0x000030da, 0x000030db, 0x000030dc, 0x000030dd, 0x000030de, 0x000030df, 0x000030e0,
        0x000030e1, 0x000030e2, 0x000030e3, 0x000030e4, 0x000030e5, 0x000030e6, 0x000030e7, 0x000030e8,
        0x000030e9, 0x000030ea, 0x000030eb, 0x000030ec, 0x000030ed, 0x000030ee, 0x000030ef, 0x000030f0,
        0x000030f1, 0x000030f2, 0x000030f3, 0x000030f4, 0x000030f5, 0x000030f6, 0x30ab309a, 0x30ad309a,
        0x30af309a, 0x30b1309a, 0x30b3309a, 0x30bb309a, 0x30c4309a, 0x30c8309a,
    ],
    [
        0x00000391, 0x00000392, 0x00000393, 0x00000394, 0x00000395, 0x00000396, 0x00000397, 0x00000398,
        0x00000399, 0x0000039a, 0x0000039b, 0x0000039c, 0x0000039d, 0x0000039e, 0x0000039f, 0x000003a0,
        0x000003a1, 0x000003a3, 0x000003a4, 0x000003a5, 0x000003a6, 0x000003a7, 0x000003a8, 0x000003a9,
        0x00002664, 0x00002660, 0x00002662, 0x00002666, 0x00002661, 0x00002665, 0x00002667, 0x00002663,
        0x000003b1, 0x000003b2, 0x000003b3, 0x000003b4, 0x000003b5, 0x000003b6, 0x000003b7, 0x000003b8,
        0x000003b9, 0x000003ba, 0x000003bb, 0x000003bc, 0x000003bd, 0x000003be, 0x000003bf, 0x000003c0,
        0x000003c1, 0x000003c3, 0x000003c4, 0x000003c5, 0x000003c6, 0x000003c7, 0x000003c8, 0x000003c9,
        0x000003c2, 0x000024f5, 0x000024f6, 0x000024f7, 0x000024f8, 0x000024f9, 0x000024fa, 0x000024fb,
        0x000024fc, 0x000024fd, 0x000024fe, 0x00002616, 0x00002617, 0x00003020, 0x0000260e, 0x00002600,
        0x00002601, 0x00002602, 0x00002603, 0x00002668, 0x000025b1, 0x000031f0, 0x000031f1, 0x000031f2,
        0x000031f3, 0x000031f4, 0x000031f5, 0x000031f6, 0x000031f7, 0x000031f8, 0x000031f9, 0x31f7309a,
        0x000031fa, 0x000031fb, 0x000031fc, 0x000031fd, 0x000031fe, 0x000031ff,
    ],
    [
        0x00000410, 0x00000411, 0x00000412, 0x00000413, 0x00000414, 0x00000415, 0x00000401, 0x00000416,
        0x00000417, 0x00000418, 0x00000419, 0x0000041a, 0x0000041b, 0x0000041c, 0x0000041d, 0x0000041e,
        0x0000041f, 0x00000420, 0x00000421, 0x00000422, 0x00000423, 0x00000424, 0x00000425, 0x00000426,
        0x00000427, 0x00000428, 0x00000429, 0x0000042a, 0x0000042b, 0x0000042c, 0x0000042d, 0x0000042e,
        0x0000042f, 0x000023be, 0x000023bf, 0x000023c0, 0x000023c1, 0x000023c2, 0x000023c3, 0x000023c4,
        0x000023c5, 0x000023c6, 0x000023c7, 0x000023c8, 0x000023c9, 0x000023ca, 0x000023cb, 0x000023cc,
        0x00000430, 0x00000431, 0x00000432, 0x00000433, 0x00000434, 0x00000435, 0x00000451, 0x00000436,
        0x00000437, 0x00000438, 0x00000439, 0x0000043a, 0x0000043b, 0x0000043c, 0x0000043d, 0x0000043e,
        0x0000043f, 0x00000440, 0x00000441, 0x00000442, 0x00000443, 0x00000444, 0x00000445, 0x00000446,
        0x00000447, 0x00000448, 0x00000449, 0x0000044a, 0x0000044b, 0x0000044c, 0x0000044d, 0x0000044e,
        0x0000044f, 0x000030f7, 0x000030f8, 0x000030f9, 0x000030fa, 0x000022da, 0x000022db, 0x00002153,
        0x00002154, 0x00002155, 0x00002713, 0x00002318, 0x00002423, 0x000023ce,
    ],
    [
        0x00002500, 0x00002502, 0x0000250c, 0x00002510, 0x00002518, 0x00002514, 0x0000251c, 0x0000252c,
        0x00002524, 0x00002534, 0x0000253c, 0x00002501, 0x00002503, 0x0000250f, 0x00002513, 0x0000251b,
        0x00002517, 0x00002523, 0x00002533, 0x0000252b, 0x0000253b, 0x0000254b, 0x00002520, 0x0000252f,
        0x00002528, 0x00002537, 0x0000253f, 0x0000251d, 0x00002530, 0x00002525, 0x00002538, 0x00002542,
        0x00003251, 0x00003252, 0x00003253, 0x00003254, 0x00003255, 0x00003256, 0x00003257, 0x00003258,
        0x00003259, 0x0000325a, 0x0000325b, 0x0000325c, 0x0000325d, 0x0000325e, 0x0000325f, 0x000032b1,
        0x000032b2, 0x000032b3, 0x000032b4, 0x000032b5, 0x000032b6, 0x000032b7, 0x000032b8, 0x000032b9,
        0x000032ba, 0x000032bb, 0x000032bc, 0x000032bd, 0x000032be, 0x000032bf, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x000025d0, 0x000025d1,
        0x000025d2, 0x000025d3, 0x0000203c, 0x00002047, 0x00002048, 0x00002049, 0x000001cd, 0x000001ce,
        0x000001d0, 0x00001e3e, 0x00001e3f, 0x000001f8, 0x000001f9, 0x000001d1, 0x000001d2, 0x000001d4,
        0x000001d6, 0x000001d8, 0x000001da, 0x000001dc, 0x00000000, 0x00000000,
    ],
    [
        0x000020ac, 0x000000a0, 0x000000a1, 0x000000a4, 0x000000a6, 0x000000a9, 0x000000aa, 0x000000ab,
        0x000000ad, 0x000000ae, 0x000000af, 0x000000b2, 0x000000b3, 0x000000b7, 0x000000b8, 0x000000b9,
        0x000000ba, 0x000000bb, 0x000000bc, 0x000000bd, 0x000000be, 0x000000bf, 0x000000c0, 0x000000c1,
        0x000000c2, 0x000000c3, 0x000000c4, 0x000000c5, 0x000000c6, 0x000000c7, 0x000000c8, 0x000000c9,
        0x000000ca, 0x000000cb, 0x000000cc, 0x000000cd, 0x000000ce, 0x000000cf, 0x000000d0, 0x000000d1,
        0x000000d2, 0x000000d3, 0x000000d4, 0x000000d5, 0x000000d6, 0x000000d8, 0x000000d9, 0x000000da,
        0x000000db, 0x000000dc, 0x000000dd, 0x000000de, 0x000000df, 0x000000e0, 0x000000e1, 0x000000e2,
        0x000000e3, 0x000000e4, 0x000000e5, 0x000000e6, 0x000000e7, 0x000000e8, 0x000000e9, 0x000000ea,
        0x000000eb, 0x000000ec, 0x000000ed, 0x000000ee, 0x000000ef, 0x000000f0, 0x000000f1, 0x000000f2,
        0x000000f3, 0x000000f4, 0x000000f5, 0x000000f6, 0x000000f8, 0x000000f9, 0x000000fa, 0x000000fb,
        0x000000fc, 0x000000fd, 0x000000fe, 0x000000ff, 0x00000100, 0x0000012a, 0x0000016a, 0x00000112,
        0x0000014c, 0x00000101, 0x0000012b, 0x0000016b, 0x00000113, 0x0000014d,
    ],
    [
        0x00000104, 0x000002d8, 0x00000141, 0x0000013d, 0x0000015a, 0x00000160, 0x0000015e, 0x00000164,
        0x00000179, 0x0000017d, 0x0000017b, 0x00000105, 0x000002db, 0x00000142, 0x0000013e, 0x0000015b,
        0x000002c7, 0x00000161, 0x0000015f, 0x00000165, 0x0000017a, 0x000002dd, 0x0000017e, 0x0000017c,
        0x00000154, 0x00000102, 0x00000139, 0x00000106, 0x0000010c, 0x00000118, 0x0000011a, 0x0000010e,
        0x00000143, 0x00000147, 0x00000150, 0x00000158, 0x0000016e, 0x00000170, 0x00000162, 0x00000155,
        0x00000103, 0x0000013a, 0x00000107, 0x0000010d, 0x00000119, 0x0000011b, 0x0000010f, 0x00000111,
        0x00000144, 0x00000148, 0x00000151, 0x00000159, 0x0000016f, 0x00000171, 0x00000163, 0x000002d9,
        0x00000108, 0x0000011c, 0x00000124, 0x00000134, 0x0000015c, 0x0000016c, 0x00000109, 0x0000011d,
        0x00000125, 0x00000135, 0x0000015d, 0x0000016d, 0x00000271, 0x0000028b, 0x0000027e, 0x00000283,
        0x00000292, 0x0000026c, 0x0000026e, 0x00000279, 0x00000288, 0x00000256, 0x00000273, 0x0000027d,
        0x00000282, 0x00000290, 0x0000027b, 0x0000026d, 0x0000025f, 0x00000272, 0x0000029d, 0x0000028e,
        0x00000261, 0x0000014b, 0x00000270, 0x00000281, 0x00000127, 0x00000295,
    ],
    [
        0x00000294, 0x00000266, 0x00000298, 0x000001c2, 0x00000253, 0x00000257, 0x00000284, 0x00000260,
        0x00000193, 0x00000153, 0x00000152, 0x00000268, 0x00000289, 0x00000258, 0x00000275, 0x00000259,
        0x0000025c, 0x0000025e, 0x00000250, 0x0000026f, 0x0000028a, 0x00000264, 0x0000028c, 0x00000254,
        0x00000251, 0x00000252, 0x0000028d, 0x00000265, 0x000002a2, 0x000002a1, 0x00000255, 0x00000291,
        0x0000027a, 0x00000267, 0x0000025a, 0x00e60300, 0x000001fd, 0x00001f70, 0x00001f71, 0x02540300,
        0x02540301, 0x028c0300, 0x028c0301, 0x02590300, 0x02590301, 0x025a0300, 0x025a0301, 0x00001f72,
        0x00001f73, 0x00000361, 0x000002c8, 0x000002cc, 0x000002d0, 0x000002d1, 0x00000306, 0x0000203f,
        0x0000030b, 0x00000301, 0x00000304, 0x00000300, 0x0000030f, 0x0000030c, 0x00000302, 0x000002e5,
        0x000002e6, 0x000002e7, 0x000002e8, 0x000002e9, 0x02e902e5, 0x02e502e9, 0x00000325, 0x0000032c,
        0x00000339, 0x0000031c, 0x0000031f, 0x00000320, 0x00000308, 0x0000033d, 0x00000329, 0x0000032f,
        0x000002de, 0x00000324, 0x00000330, 0x0000033c, 0x00000334, 0x0000031d, 0x0000031e, 0x00000318,
        0x00000319, 0x0000032a, 0x0000033a, 0x0000033b, 0x00000303, 0x0000031a,
    ],
    [
        0x00002776, 0x00002777, 0x00002778, 0x00002779, 0x0000277a, 0x0000277b, 0x0000277c, 0x0000277d,
        0x0000277e, 0x0000277f, 0x000024eb, 0x000024ec, 0x000024ed, 0x000024ee, 0x000024ef, 0x000024f0,
        0x000024f1, 0x000024f2, 0x000024f3, 0x000024f4, 0x00002170, 0x00002171, 0x00002172, 0x00002173,
        0x00002174, 0x00002175, 0x00002176, 0x00002177, 0x00002178, 0x00002179, 0x0000217a, 0x0000217b,
        0x000024d0, 0x000024d1, 0x000024d2, 0x000024d3, 0x000024d4, 0x000024d5, 0x000024d6, 0x000024d7,
        0x000024d8, 0x000024d9, 0x000024da, 0x000024db, 0x000024dc, 0x000024dd, 0x000024de, 0x000024df,
        0x000024e0, 0x000024e1, 0x000024e2, 0x000024e3, 0x000024e4, 0x000024e5, 0x000024e6, 0x000024e7,
        0x000024e8, 0x000024e9, 0x000032d0, 0x000032d1, 0x000032d2, 0x000032d3, 0x000032d4, 0x000032d5,
        0x000032d6, 0x000032d7, 0x000032d8, 0x000032d9, 0x000032da, 0x000032db, 0x000032dc, 0x000032dd,
        0x000032de, 0x000032df, 0x000032e0, 0x000032e1, 0x000032e2, 0x000032e3, 0x000032fa, 0x000032e9,
        0x000032e5, 0x000032ed, 0x000032ec, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00002051, 0x00002042,
    ],
    [
        0x00002460, 0x00002461, 0x00002462, 0x00002463, 0x00002464, 0x00002465, 0x00002466, 0x00002467,
        0x00002468, 0x00002469, 0x0000246a, 0x0000246b, 0x0000246c, 0x0000246d, 0x0000246e, 0x0000246f,
        0x00002470, 0x00002471, 0x00002472, 0x00002473, 0x00002160, 0x00002161, 0x00002162, 0x00002163,
        0x00002164, 0x00002165, 0x00002166, 0x00002167, 0x00002168, 0x00002169, 0x0000216a, 0x00003349,
        0x00003314, 0x00003322, 0x0000334d, 0x00003318, 0x00003327, 0x00003303, 0x00003336, 0x00003351,
        0x00003357, 0x0000330d, 0x00003326, 0x00003323, 0x0000332b, 0x0000334a, 0x0000333b, 0x0000339c,
        0x0000339d, 0x0000339e, 0x0000338e, 0x0000338f, 0x000033c4, 0x000033a1, 0x0000216b, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000337b, 0x0000301d,
        0x0000301f, 0x00002116, 0x000033cd, 0x00002121, 0x000032a4, 0x000032a5, 0x000032a6, 0x000032a7,
        0x000032a8, 0x00003231, 0x00003232, 0x00003239, 0x0000337e, 0x0000337d, 0x0000337c, 0x00000000,
        0x00000000, 0x00000000, 0x0000222e, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x0000221f,
        0x000022bf, 0x00000000, 0x00000000, 0x00000000, 0x00002756, 0x0000261e,
    ],
    [
        0x00004ff1, 0x0002000b, 0x00003402, 0x00004e28, 0x00004e2f, 0x00004e30, 0x00004e8d, 0x00004ee1,
        0x00004efd, 0x00004eff, 0x00004f03, 0x00004f0b, 0x00004f60, 0x00004f48, 0x00004f49, 0x00004f56,
        0x00004f5f, 0x00004f6a, 0x00004f6c, 0x00004f7e, 0x00004f8a, 0x00004f94, 0x00004f97, 0x0000fa30,
        0x00004fc9, 0x00004fe0, 0x00005001, 0x00005002, 0x0000500e, 0x00005018, 0x00005027, 0x0000502e,
        0x00005040, 0x0000503b, 0x00005041, 0x00005094, 0x000050cc, 0x000050f2, 0x000050d0, 0x000050e6,
        0x0000fa31, 0x00005106, 0x00005103, 0x0000510b, 0x0000511e, 0x00005135, 0x0000514a, 0x0000fa32,
        0x00005155, 0x00005157, 0x000034b5, 0x0000519d, 0x000051c3, 0x000051ca, 0x000051de, 0x000051e2,
        0x000051ee, 0x00005201, 0x000034db, 0x00005213, 0x00005215, 0x00005249, 0x00005257, 0x00005261,
        0x00005293, 0x000052c8, 0x0000fa33, 0x000052cc, 0x000052d0, 0x000052d6, 0x000052db, 0x0000fa34,
        0x000052f0, 0x000052fb, 0x00005300, 0x00005307, 0x0000531c, 0x0000fa35, 0x00005361, 0x00005363,
        0x0000537d, 0x00005393, 0x0000539d, 0x000053b2, 0x00005412, 0x00005427, 0x0000544d, 0x0000549c,
        0x0000546b, 0x00005474, 0x0000547f, 0x00005488, 0x00005496, 0x000054a1,
    ],
    [
        0x000054a9, 0x000054c6, 0x000054ff, 0x0000550e, 0x0000552b, 0x00005535, 0x00005550, 0x0000555e,
        0x00005581, 0x00005586, 0x0000558e, 0x0000fa36, 0x000055ad, 0x000055ce, 0x0000fa37, 0x00005608,
        0x0000560e, 0x0000563b, 0x00005649, 0x00005676, 0x00005666, 0x0000fa38, 0x0000566f, 0x00005671,
        0x00005672, 0x00005699, 0x0000569e, 0x000056a9, 0x000056ac, 0x000056b3, 0x000056c9, 0x000056ca,
        0x0000570a, 0x0002123d, 0x00005721, 0x0000572f, 0x00005733, 0x00005734, 0x00005770, 0x00005777,
        0x0000577c, 0x0000579c, 0x0000fa0f, 0x0002131b, 0x000057b8, 0x000057c7, 0x000057c8, 0x000057cf,
        0x000057e4, 0x000057ed, 0x000057f5, 0x000057f6, 0x000057ff, 0x00005809, 0x0000fa10, 0x00005861,
        0x00005864, 0x0000fa39, 0x0000587c, 0x00005889, 0x0000589e, 0x0000fa3a, 0x000058a9, 0x0002146e,
        0x000058d2, 0x000058ce, 0x000058d4, 0x000058da, 0x000058e0, 0x000058e9, 0x0000590c, 0x00008641,
        0x0000595d, 0x0000596d, 0x0000598b, 0x00005992, 0x000059a4, 0x000059c3, 0x000059d2, 0x000059dd,
        0x00005a13, 0x00005a23, 0x00005a67, 0x00005a6d, 0x00005a77, 0x00005a7e, 0x00005a84, 0x00005a9e,
        0x00005aa7, 0x00005ac4, 0x000218bd, 0x00005b19, 0x00005b25, 0x0000525d,
    ],
    [
        0x00004e9c, 0x00005516, 0x00005a03, 0x0000963f, 0x000054c0, 0x0000611b, 0x00006328, 0x000059f6,
        0x00009022, 0x00008475, 0x0000831c, 0x00007a50, 0x000060aa, 0x000063e1, 0x00006e25, 0x000065ed,
        0x00008466, 0x000082a6, 0x00009bf5, 0x00006893, 0x00005727, 0x000065a1, 0x00006271, 0x00005b9b,
        0x000059d0, 0x0000867b, 0x000098f4, 0x00007d62, 0x00007dbe, 0x00009b8e, 0x00006216, 0x00007c9f,
        0x000088b7, 0x00005b89, 0x00005eb5, 0x00006309, 0x00006697, 0x00006848, 0x000095c7, 0x0000978d,
        0x0000674f, 0x00004ee5, 0x00004f0a, 0x00004f4d, 0x00004f9d, 0x00005049, 0x000056f2, 0x00005937,
        0x000059d4, 0x00005a01, 0x00005c09, 0x000060df, 0x0000610f, 0x00006170, 0x00006613, 0x00006905,
        0x000070ba, 0x0000754f, 0x00007570, 0x000079fb, 0x00007dad, 0x00007def, 0x000080c3, 0x0000840e,
        0x00008863, 0x00008b02, 0x00009055, 0x0000907a, 0x0000533b, 0x00004e95, 0x00004ea5, 0x000057df,
        0x000080b2, 0x000090c1, 0x000078ef, 0x00004e00, 0x000058f1, 0x00006ea2, 0x00009038, 0x00007a32,
        0x00008328, 0x0000828b, 0x00009c2f, 0x00005141, 0x00005370, 0x000054bd, 0x000054e1, 0x000056e0,
        0x000059fb, 0x00005f15, 0x000098f2, 0x00006deb, 0x000080e4, 0x0000852d,
    ],
    [
        0x00009662, 0x00009670, 0x000096a0, 0x000097fb, 0x0000540b, 0x000053f3, 0x00005b87, 0x000070cf,
        0x00007fbd, 0x00008fc2, 0x000096e8, 0x0000536f, 0x00009d5c, 0x00007aba, 0x00004e11, 0x00007893,
        0x000081fc, 0x00006e26, 0x00005618, 0x00005504, 0x00006b1d, 0x0000851a, 0x00009c3b, 0x000059e5,
        0x000053a9, 0x00006d66, 0x000074dc, 0x0000958f, 0x00005642, 0x00004e91, 0x0000904b, 0x000096f2,
        0x0000834f, 0x0000990c, 0x000053e1, 0x000055b6, 0x00005b30, 0x00005f71, 0x00006620, 0x000066f3,
        0x00006804, 0x00006c38, 0x00006cf3, 0x00006d29, 0x0000745b, 0x000076c8, 0x00007a4e, 0x00009834,
        0x000082f1, 0x0000885b, 0x00008a60, 0x000092ed, 0x00006db2, 0x000075ab, 0x000076ca, 0x000099c5,
        0x000060a6, 0x00008b01, 0x00008d8a, 0x000095b2, 0x0000698e, 0x000053ad, 0x00005186, 0x00005712,
        0x00005830, 0x00005944, 0x00005bb4, 0x00005ef6, 0x00006028, 0x000063a9, 0x000063f4, 0x00006cbf,
        0x00006f14, 0x0000708e, 0x00007114, 0x00007159, 0x000071d5, 0x0000733f, 0x00007e01, 0x00008276,
        0x000082d1, 0x00008597, 0x00009060, 0x0000925b, 0x00009d1b, 0x00005869, 0x000065bc, 0x00006c5a,
        0x00007525, 0x000051f9, 0x0000592e, 0x00005965, 0x00005f80, 0x00005fdc,
    ],
    [
        0x000062bc, 0x000065fa, 0x00006a2a, 0x00006b27, 0x00006bb4, 0x0000738b, 0x00007fc1, 0x00008956,
        0x00009d2c, 0x00009d0e, 0x00009ec4, 0x00005ca1, 0x00006c96, 0x0000837b, 0x00005104, 0x00005c4b,
        0x000061b6, 0x000081c6, 0x00006876, 0x00007261, 0x00004e59, 0x00004ffa, 0x00005378, 0x00006069,
        0x00006e29, 0x00007a4f, 0x000097f3, 0x00004e0b, 0x00005316, 0x00004eee, 0x00004f55, 0x00004f3d,
        0x00004fa1, 0x00004f73, 0x000052a0, 0x000053ef, 0x00005609, 0x0000590f, 0x00005ac1, 0x00005bb6,
        0x00005be1, 0x000079d1, 0x00006687, 0x0000679c, 0x000067b6, 0x00006b4c, 0x00006cb3, 0x0000706b,
        0x000073c2, 0x0000798d, 0x000079be, 0x00007a3c, 0x00007b87, 0x000082b1, 0x000082db, 0x00008304,
        0x00008377, 0x000083ef, 0x000083d3, 0x00008766, 0x00008ab2, 0x00005629, 0x00008ca8, 0x00008fe6,
        0x0000904e, 0x0000971e, 0x0000868a, 0x00004fc4, 0x00005ce8, 0x00006211, 0x00007259, 0x0000753b,
        0x000081e5, 0x000082bd, 0x000086fe, 0x00008cc0, 0x000096c5, 0x00009913, 0x000099d5, 0x00004ecb,
        0x00004f1a, 0x000089e3, 0x000056de, 0x0000584a, 0x000058ca, 0x00005efb, 0x00005feb, 0x0000602a,
        0x00006094, 0x00006062, 0x000061d0, 0x00006212, 0x000062d0, 0x00006539,
    ],
    [
        0x00009b41, 0x00006666, 0x000068b0, 0x00006d77, 0x00007070, 0x0000754c, 0x00007686, 0x00007d75,
        0x000082a5, 0x000087f9, 0x0000958b, 0x0000968e, 0x00008c9d, 0x000051f1, 0x000052be, 0x00005916,
        0x000054b3, 0x00005bb3, 0x00005d16, 0x00006168, 0x00006982, 0x00006daf, 0x0000788d, 0x000084cb,
        0x00008857, 0x00008a72, 0x000093a7, 0x00009ab8, 0x00006d6c, 0x000099a8, 0x000086d9, 0x000057a3,
        0x000067ff, 0x000086ce, 0x0000920e, 0x00005283, 0x00005687, 0x00005404, 0x00005ed3, 0x000062e1,
        0x000064b9, 0x0000683c, 0x00006838, 0x00006bbb, 0x00007372, 0x000078ba, 0x00007a6b, 0x0000899a,
        0x000089d2, 0x00008d6b, 0x00008f03, 0x000090ed, 0x000095a3, 0x00009694, 0x00009769, 0x00005b66,
        0x00005cb3, 0x0000697d, 0x0000984d, 0x0000984e, 0x0000639b, 0x00007b20, 0x00006a2b, 0x00006a7f,
        0x000068b6, 0x00009c0d, 0x00006f5f, 0x00005272, 0x0000559d, 0x00006070, 0x000062ec, 0x00006d3b,
        0x00006e07, 0x00006ed1, 0x0000845b, 0x00008910, 0x00008f44, 0x00004e14, 0x00009c39, 0x000053f6,
        0x0000691b, 0x00006a3a, 0x00009784, 0x0000682a, 0x0000515c, 0x00007ac3, 0x000084b2, 0x000091dc,
        0x0000938c, 0x0000565b, 0x00009d28, 0x00006822, 0x00008305, 0x00008431,
    ],
    [
        0x00007ca5, 0x00005208, 0x000082c5, 0x000074e6, 0x00004e7e, 0x00004f83, 0x000051a0, 0x00005bd2,
        0x0000520a, 0x000052d8, 0x000052e7, 0x00005dfb, 0x0000559a, 0x0000582a, 0x000059e6, 0x00005b8c,
        0x00005b98, 0x00005bdb, 0x00005e72, 0x00005e79, 0x000060a3, 0x0000611f, 0x00006163, 0x000061be,
        0x000063db, 0x00006562, 0x000067d1, 0x00006853, 0x000068fa, 0x00006b3e, 0x00006b53, 0x00006c57,
        0x00006f22, 0x00006f97, 0x00006f45, 0x000074b0, 0x00007518, 0x000076e3, 0x0000770b, 0x00007aff,
        0x00007ba1, 0x00007c21, 0x00007de9, 0x00007f36, 0x00007ff0, 0x0000809d, 0x00008266, 0x0000839e,
        0x000089b3, 0x00008acc, 0x00008cab, 0x00009084, 0x00009451, 0x00009593, 0x00009591, 0x000095a2,
        0x00009665, 0x000097d3, 0x00009928, 0x00008218, 0x00004e38, 0x0000542b, 0x00005cb8, 0x00005dcc,
        0x000073a9, 0x0000764c, 0x0000773c, 0x00005ca9, 0x00007feb, 0x00008d0b, 0x000096c1, 0x00009811,
        0x00009854, 0x00009858, 0x00004f01, 0x00004f0e, 0x00005371, 0x0000559c, 0x00005668, 0x000057fa,
        0x00005947, 0x00005b09, 0x00005bc4, 0x00005c90, 0x00005e0c, 0x00005e7e, 0x00005fcc, 0x000063ee,
        0x0000673a, 0x000065d7, 0x000065e2, 0x0000671f, 0x000068cb, 0x000068c4,
    ],
    [
        0x00006a5f, 0x00005e30, 0x00006bc5, 0x00006c17, 0x00006c7d, 0x0000757f, 0x00007948, 0x00005b63,
        0x00007a00, 0x00007d00, 0x00005fbd, 0x0000898f, 0x00008a18, 0x00008cb4, 0x00008d77, 0x00008ecc,
        0x00008f1d, 0x000098e2, 0x00009a0e, 0x00009b3c, 0x00004e80, 0x0000507d, 0x00005100, 0x00005993,
        0x00005b9c, 0x0000622f, 0x00006280, 0x000064ec, 0x00006b3a, 0x000072a0, 0x00007591, 0x00007947,
        0x00007fa9, 0x000087fb, 0x00008abc, 0x00008b70, 0x000063ac, 0x000083ca, 0x000097a0, 0x00005409,
        0x00005403, 0x000055ab, 0x00006854, 0x00006a58, 0x00008a70, 0x00007827, 0x00006775, 0x00009ecd,
        0x00005374, 0x00005ba2, 0x0000811a, 0x00008650, 0x00009006, 0x00004e18, 0x00004e45, 0x00004ec7,
        0x00004f11, 0x000053ca, 0x00005438, 0x00005bae, 0x00005f13, 0x00006025, 0x00006551, 0x0000673d,
        0x00006c42, 0x00006c72, 0x00006ce3, 0x00007078, 0x00007403, 0x00007a76, 0x00007aae, 0x00007b08,
        0x00007d1a, 0x00007cfe, 0x00007d66, 0x000065e7, 0x0000725b, 0x000053bb, 0x00005c45, 0x00005de8,
        0x000062d2, 0x000062e0, 0x00006319, 0x00006e20, 0x0000865a, 0x00008a31, 0x00008ddd, 0x000092f8,
        0x00006f01, 0x000079a6, 0x00009b5a, 0x00004ea8, 0x00004eab, 0x00004eac,
    ],
    [
        0x00004f9b, 0x00004fa0, 0x000050d1, 0x00005147, 0x00007af6, 0x00005171, 0x000051f6, 0x00005354,
        0x00005321, 0x0000537f, 0x000053eb, 0x000055ac, 0x00005883, 0x00005ce1, 0x00005f37, 0x00005f4a,
        0x0000602f, 0x00006050, 0x0000606d, 0x0000631f, 0x00006559, 0x00006a4b, 0x00006cc1, 0x000072c2,
        0x000072ed, 0x000077ef, 0x000080f8, 0x00008105, 0x00008208, 0x0000854e, 0x000090f7, 0x000093e1,
        0x000097ff, 0x00009957, 0x00009a5a, 0x00004ef0, 0x000051dd, 0x00005c2d, 0x00006681, 0x0000696d,
        0x00005c40, 0x000066f2, 0x00006975, 0x00007389, 0x00006850, 0x00007c81, 0x000050c5, 0x000052e4,
        0x00005747, 0x00005dfe, 0x00009326, 0x000065a4, 0x00006b23, 0x00006b3d, 0x00007434, 0x00007981,
        0x000079bd, 0x00007b4b, 0x00007dca, 0x000082b9, 0x000083cc, 0x0000887f, 0x0000895f, 0x00008b39,
        0x00008fd1, 0x000091d1, 0x0000541f, 0x00009280, 0x00004e5d, 0x00005036, 0x000053e5, 0x0000533a,
        0x000072d7, 0x00007396, 0x000077e9, 0x000082e6, 0x00008eaf, 0x000099c6, 0x000099c8, 0x000099d2,
        0x00005177, 0x0000611a, 0x0000865e, 0x000055b0, 0x00007a7a, 0x00005076, 0x00005bd3, 0x00009047,
        0x00009685, 0x00004e32, 0x00006adb, 0x000091e7, 0x00005c51, 0x00005c48,
    ],
    [
        0x00006398, 0x00007a9f, 0x00006c93, 0x00009774, 0x00008f61, 0x00007aaa, 0x0000718a, 0x00009688,
        0x00007c82, 0x00006817, 0x00007e70, 0x00006851, 0x0000936c, 0x000052f2, 0x0000541b, 0x000085ab,
        0x00008a13, 0x00007fa4, 0x00008ecd, 0x000090e1, 0x00005366, 0x00008888, 0x00007941, 0x00004fc2,
        0x000050be, 0x00005211, 0x00005144, 0x00005553, 0x0000572d, 0x000073ea, 0x0000578b, 0x00005951,
        0x00005f62, 0x00005f84, 0x00006075, 0x00006176, 0x00006167, 0x000061a9, 0x000063b2, 0x0000643a,
        0x0000656c, 0x0000666f, 0x00006842, 0x00006e13, 0x00007566, 0x00007a3d, 0x00007cfb, 0x00007d4c,
        0x00007d99, 0x00007e4b, 0x00007f6b, 0x0000830e, 0x0000834a, 0x000086cd, 0x00008a08, 0x00008a63,
        0x00008b66, 0x00008efd, 0x0000981a, 0x00009d8f, 0x000082b8, 0x00008fce, 0x00009be8, 0x00005287,
        0x0000621f, 0x00006483, 0x00006fc0, 0x00009699, 0x00006841, 0x00005091, 0x00006b20, 0x00006c7a,
        0x00006f54, 0x00007a74, 0x00007d50, 0x00008840, 0x00008a23, 0x00006708, 0x00004ef6, 0x00005039,
        0x00005026, 0x00005065, 0x0000517c, 0x00005238, 0x00005263, 0x000055a7, 0x0000570f, 0x00005805,
        0x00005acc, 0x00005efa, 0x000061b2, 0x000061f8, 0x000062f3, 0x00006372,
    ],
    [
        0x0000691c, 0x00006a29, 0x0000727d, 0x000072ac, 0x0000732e, 0x00007814, 0x0000786f, 0x00007d79,
        0x0000770c, 0x000080a9, 0x0000898b, 0x00008b19, 0x00008ce2, 0x00008ed2, 0x00009063, 0x00009375,
        0x0000967a, 0x00009855, 0x00009a13, 0x00009e78, 0x00005143, 0x0000539f, 0x000053b3, 0x00005e7b,
        0x00005f26, 0x00006e1b, 0x00006e90, 0x00007384, 0x000073fe, 0x00007d43, 0x00008237, 0x00008a00,
        0x00008afa, 0x00009650, 0x00004e4e, 0x0000500b, 0x000053e4, 0x0000547c, 0x000056fa, 0x000059d1,
        0x00005b64, 0x00005df1, 0x00005eab, 0x00005f27, 0x00006238, 0x00006545, 0x000067af, 0x00006e56,
        0x000072d0, 0x00007cca, 0x000088b4, 0x000080a1, 0x000080e1, 0x000083f0, 0x0000864e, 0x00008a87,
        0x00008de8, 0x00009237, 0x000096c7, 0x00009867, 0x00009f13, 0x00004e94, 0x00004e92, 0x00004f0d,
        0x00005348, 0x00005449, 0x0000543e, 0x00005a2f, 0x00005f8c, 0x00005fa1, 0x0000609f, 0x000068a7,
        0x00006a8e, 0x0000745a, 0x00007881, 0x00008a9e, 0x00008aa4, 0x00008b77, 0x00009190, 0x00004e5e,
        0x00009bc9, 0x00004ea4, 0x00004f7c, 0x00004faf, 0x00005019, 0x00005016, 0x00005149, 0x0000516c,
        0x0000529f, 0x000052b9, 0x000052fe, 0x0000539a, 0x000053e3, 0x00005411,
    ],
    [
        0x0000540e, 0x00005589, 0x00005751, 0x000057a2, 0x0000597d, 0x00005b54, 0x00005b5d, 0x00005b8f,
        0x00005de5, 0x00005de7, 0x00005df7, 0x00005e78, 0x00005e83, 0x00005e9a, 0x00005eb7, 0x00005f18,
        0x00006052, 0x0000614c, 0x00006297, 0x000062d8, 0x000063a7, 0x0000653b, 0x00006602, 0x00006643,
        0x000066f4, 0x0000676d, 0x00006821, 0x00006897, 0x000069cb, 0x00006c5f, 0x00006d2a, 0x00006d69,
        0x00006e2f, 0x00006e9d, 0x00007532, 0x00007687, 0x0000786c, 0x00007a3f, 0x00007ce0, 0x00007d05,
        0x00007d18, 0x00007d5e, 0x00007db1, 0x00008015, 0x00008003, 0x000080af, 0x000080b1, 0x00008154,
        0x0000818f, 0x0000822a, 0x00008352, 0x0000884c, 0x00008861, 0x00008b1b, 0x00008ca2, 0x00008cfc,
        0x000090ca, 0x00009175, 0x00009271, 0x0000783f, 0x000092fc, 0x000095a4, 0x0000964d, 0x00009805,
        0x00009999, 0x00009ad8, 0x00009d3b, 0x0000525b, 0x000052ab, 0x000053f7, 0x00005408, 0x000058d5,
        0x000062f7, 0x00006fe0, 0x00008c6a, 0x00008f5f, 0x00009eb9, 0x0000514b, 0x0000523b, 0x0000544a,
        0x000056fd, 0x00007a40, 0x00009177, 0x00009d60, 0x00009ed2, 0x00007344, 0x00006f09, 0x00008170,
        0x00007511, 0x00005ffd, 0x000060da, 0x00009aa8, 0x000072db, 0x00008fbc,
    ],
    [
        0x00006b64, 0x00009803, 0x00004eca, 0x000056f0, 0x00005764, 0x000058be, 0x00005a5a, 0x00006068,
        0x000061c7, 0x0000660f, 0x00006606, 0x00006839, 0x000068b1, 0x00006df7, 0x000075d5, 0x00007d3a,
        0x0000826e, 0x00009b42, 0x00004e9b, 0x00004f50, 0x000053c9, 0x00005506, 0x00005d6f, 0x00005de6,
        0x00005dee, 0x000067fb, 0x00006c99, 0x00007473, 0x00007802, 0x00008a50, 0x00009396, 0x000088df,
        0x00005750, 0x00005ea7, 0x0000632b, 0x000050b5, 0x000050ac, 0x0000518d, 0x00006700, 0x000054c9,
        0x0000585e, 0x000059bb, 0x00005bb0, 0x00005f69, 0x0000624d, 0x000063a1, 0x0000683d, 0x00006b73,
        0x00006e08, 0x0000707d, 0x000091c7, 0x00007280, 0x00007815, 0x00007826, 0x0000796d, 0x0000658e,
        0x00007d30, 0x000083dc, 0x000088c1, 0x00008f09, 0x0000969b, 0x00005264, 0x00005728, 0x00006750,
        0x00007f6a, 0x00008ca1, 0x000051b4, 0x00005742, 0x0000962a, 0x0000583a, 0x0000698a, 0x000080b4,
        0x000054b2, 0x00005d0e, 0x000057fc, 0x00007895, 0x00009dfa, 0x00004f5c, 0x0000524a, 0x0000548b,
        0x0000643e, 0x00006628, 0x00006714, 0x000067f5, 0x00007a84, 0x00007b56, 0x00007d22, 0x0000932f,
        0x0000685c, 0x00009bad, 0x00007b39, 0x00005319, 0x0000518a, 0x00005237,
    ],
    [
        0x00005bdf, 0x000062f6, 0x000064ae, 0x000064e6, 0x0000672d, 0x00006bba, 0x000085a9, 0x000096d1,
        0x00007690, 0x00009bd6, 0x0000634c, 0x00009306, 0x00009bab, 0x000076bf, 0x00006652, 0x00004e09,
        0x00005098, 0x000053c2, 0x00005c71, 0x000060e8, 0x00006492, 0x00006563, 0x0000685f, 0x000071e6,
        0x000073ca, 0x00007523, 0x00007b97, 0x00007e82, 0x00008695, 0x00008b83, 0x00008cdb, 0x00009178,
        0x00009910, 0x000065ac, 0x000066ab, 0x00006b8b, 0x00004ed5, 0x00004ed4, 0x00004f3a, 0x00004f7f,
        0x0000523a, 0x000053f8, 0x000053f2, 0x000055e3, 0x000056db, 0x000058eb, 0x000059cb, 0x000059c9,
        0x000059ff, 0x00005b50, 0x00005c4d, 0x00005e02, 0x00005e2b, 0x00005fd7, 0x0000601d, 0x00006307,
        0x0000652f, 0x00005b5c, 0x000065af, 0x000065bd, 0x000065e8, 0x0000679d, 0x00006b62, 0x00006b7b,
        0x00006c0f, 0x00007345, 0x00007949, 0x000079c1, 0x00007cf8, 0x00007d19, 0x00007d2b, 0x000080a2,
        0x00008102, 0x000081f3, 0x00008996, 0x00008a5e, 0x00008a69, 0x00008a66, 0x00008a8c, 0x00008aee,
        0x00008cc7, 0x00008cdc, 0x000096cc, 0x000098fc, 0x00006b6f, 0x00004e8b, 0x00004f3c, 0x00004f8d,
        0x00005150, 0x00005b57, 0x00005bfa, 0x00006148, 0x00006301, 0x00006642,
    ],
    [
        0x00006b21, 0x00006ecb, 0x00006cbb, 0x0000723e, 0x000074bd, 0x000075d4, 0x000078c1, 0x0000793a,
        0x0000800c, 0x00008033, 0x000081ea, 0x00008494, 0x00008f9e, 0x00006c50, 0x00009e7f, 0x00005f0f,
        0x00008b58, 0x00009d2b, 0x00007afa, 0x00008ef8, 0x00005b8d, 0x000096eb, 0x00004e03, 0x000053f1,
        0x000057f7, 0x00005931, 0x00005ac9, 0x00005ba4, 0x00006089, 0x00006e7f, 0x00006f06, 0x000075be,
        0x00008cea, 0x00005b9f, 0x00008500, 0x00007be0, 0x00005072, 0x000067f4, 0x0000829d, 0x00005c61,
        0x0000854a, 0x00007e1e, 0x0000820e, 0x00005199, 0x00005c04, 0x00006368, 0x00008d66, 0x0000659c,
        0x0000716e, 0x0000793e, 0x00007d17, 0x00008005, 0x00008b1d, 0x00008eca, 0x0000906e, 0x000086c7,
        0x000090aa, 0x0000501f, 0x000052fa, 0x00005c3a, 0x00006753, 0x0000707c, 0x00007235, 0x0000914c,
        0x000091c8, 0x0000932b, 0x000082e5, 0x00005bc2, 0x00005f31, 0x000060f9, 0x00004e3b, 0x000053d6,
        0x00005b88, 0x0000624b, 0x00006731, 0x00006b8a, 0x000072e9, 0x000073e0, 0x00007a2e, 0x0000816b,
        0x00008da3, 0x00009152, 0x00009996, 0x00005112, 0x000053d7, 0x0000546a, 0x00005bff, 0x00006388,
        0x00006a39, 0x00007dac, 0x00009700, 0x000056da, 0x000053ce, 0x00005468,
    ],
    [
        0x00005b97, 0x00005c31, 0x00005dde, 0x00004fee, 0x00006101, 0x000062fe, 0x00006d32, 0x000079c0,
        0x000079cb, 0x00007d42, 0x00007e4d, 0x00007fd2, 0x000081ed, 0x0000821f, 0x00008490, 0x00008846,
        0x00008972, 0x00008b90, 0x00008e74, 0x00008f2f, 0x00009031, 0x0000914b, 0x0000916c, 0x000096c6,
        0x0000919c, 0x00004ec0, 0x00004f4f, 0x00005145, 0x00005341, 0x00005f93, 0x0000620e, 0x000067d4,
        0x00006c41, 0x00006e0b, 0x00007363, 0x00007e26, 0x000091cd, 0x00009283, 0x000053d4, 0x00005919,
        0x00005bbf, 0x00006dd1, 0x0000795d, 0x00007e2e, 0x00007c9b, 0x0000587e, 0x0000719f, 0x000051fa,
        0x00008853, 0x00008ff0, 0x00004fca, 0x00005cfb, 0x00006625, 0x000077ac, 0x00007ae3, 0x0000821c,
        0x000099ff, 0x000051c6, 0x00005faa, 0x000065ec, 0x0000696f, 0x00006b89, 0x00006df3, 0x00006e96,
        0x00006f64, 0x000076fe, 0x00007d14, 0x00005de1, 0x00009075, 0x00009187, 0x00009806, 0x000051e6,
        0x0000521d, 0x00006240, 0x00006691, 0x000066d9, 0x00006e1a, 0x00005eb6, 0x00007dd2, 0x00007f72,
        0x000066f8, 0x000085af, 0x000085f7, 0x00008af8, 0x000052a9, 0x000053d9, 0x00005973, 0x00005e8f,
        0x00005f90, 0x00006055, 0x000092e4, 0x00009664, 0x000050b7, 0x0000511f,
    ],
    [
        0x000052dd, 0x00005320, 0x00005347, 0x000053ec, 0x000054e8, 0x00005546, 0x00005531, 0x00005617,
        0x00005968, 0x000059be, 0x00005a3c, 0x00005bb5, 0x00005c06, 0x00005c0f, 0x00005c11, 0x00005c1a,
        0x00005e84, 0x00005e8a, 0x00005ee0, 0x00005f70, 0x0000627f, 0x00006284, 0x000062db, 0x0000638c,
        0x00006377, 0x00006607, 0x0000660c, 0x0000662d, 0x00006676, 0x0000677e, 0x000068a2, 0x00006a1f,
        0x00006a35, 0x00006cbc, 0x00006d88, 0x00006e09, 0x00006e58, 0x0000713c, 0x00007126, 0x00007167,
        0x000075c7, 0x00007701, 0x0000785d, 0x00007901, 0x00007965, 0x000079f0, 0x00007ae0, 0x00007b11,
        0x00007ca7, 0x00007d39, 0x00008096, 0x000083d6, 0x0000848b, 0x00008549, 0x0000885d, 0x000088f3,
        0x00008a1f, 0x00008a3c, 0x00008a54, 0x00008a73, 0x00008c61, 0x00008cde, 0x000091a4, 0x00009266,
        0x0000937e, 0x00009418, 0x0000969c, 0x00009798, 0x00004e0a, 0x00004e08, 0x00004e1e, 0x00004e57,
        0x00005197, 0x00005270, 0x000057ce, 0x00005834, 0x000058cc, 0x00005b22, 0x00005e38, 0x000060c5,
        0x000064fe, 0x00006761, 0x00006756, 0x00006d44, 0x000072b6, 0x00007573, 0x00007a63, 0x000084b8,
        0x00008b72, 0x000091b8, 0x00009320, 0x00005631, 0x000057f4, 0x000098fe,
    ],
    [
        0x000062ed, 0x0000690d, 0x00006b96, 0x000071ed, 0x00007e54, 0x00008077, 0x00008272, 0x000089e6,
        0x000098df, 0x00008755, 0x00008fb1, 0x00005c3b, 0x00004f38, 0x00004fe1, 0x00004fb5, 0x00005507,
        0x00005a20, 0x00005bdd, 0x00005be9, 0x00005fc3, 0x0000614e, 0x0000632f, 0x000065b0, 0x0000664b,
        0x000068ee, 0x0000699b, 0x00006d78, 0x00006df1, 0x00007533, 0x000075b9, 0x0000771f, 0x0000795e,
        0x000079e6, 0x00007d33, 0x000081e3, 0x000082af, 0x000085aa, 0x000089aa, 0x00008a3a, 0x00008eab,
        0x00008f9b, 0x00009032, 0x000091dd, 0x00009707, 0x00004eba, 0x00004ec1, 0x00005203, 0x00005875,
        0x000058ec, 0x00005c0b, 0x0000751a, 0x00005c3d, 0x0000814e, 0x00008a0a, 0x00008fc5, 0x00009663,
        0x0000976d, 0x00007b25, 0x00008acf, 0x00009808, 0x00009162, 0x000056f3, 0x000053a8, 0x00009017,
        0x00005439, 0x00005782, 0x00005e25, 0x000063a8, 0x00006c34, 0x0000708a, 0x00007761, 0x00007c8b,
        0x00007fe0, 0x00008870, 0x00009042, 0x00009154, 0x00009310, 0x00009318, 0x0000968f, 0x0000745e,
        0x00009ac4, 0x00005d07, 0x00005d69, 0x00006570, 0x000067a2, 0x00008da8, 0x000096db, 0x0000636e,
        0x00006749, 0x00006919, 0x000083c5, 0x00009817, 0x000096c0, 0x000088fe,
    ],
    [
        0x00006f84, 0x0000647a, 0x00005bf8, 0x00004e16, 0x0000702c, 0x0000755d, 0x0000662f, 0x000051c4,
        0x00005236, 0x000052e2, 0x000059d3, 0x00005f81, 0x00006027, 0x00006210, 0x0000653f, 0x00006574,
        0x0000661f, 0x00006674, 0x000068f2, 0x00006816, 0x00006b63, 0x00006e05, 0x00007272, 0x0000751f,
        0x000076db, 0x00007cbe, 0x00008056, 0x000058f0, 0x000088fd, 0x0000897f, 0x00008aa0, 0x00008a93,
        0x00008acb, 0x0000901d, 0x00009192, 0x00009752, 0x00009759, 0x00006589, 0x00007a0e, 0x00008106,
        0x000096bb, 0x00005e2d, 0x000060dc, 0x0000621a, 0x000065a5, 0x00006614, 0x00006790, 0x000077f3,
        0x00007a4d, 0x00007c4d, 0x00007e3e, 0x0000810a, 0x00008cac, 0x00008d64, 0x00008de1, 0x00008e5f,
        0x000078a9, 0x00005207, 0x000062d9, 0x000063a5, 0x00006442, 0x00006298, 0x00008a2d, 0x00007a83,
        0x00007bc0, 0x00008aac, 0x000096ea, 0x00007d76, 0x0000820c, 0x00008749, 0x00004ed9, 0x00005148,
        0x00005343, 0x00005360, 0x00005ba3, 0x00005c02, 0x00005c16, 0x00005ddd, 0x00006226, 0x00006247,
        0x000064b0, 0x00006813, 0x00006834, 0x00006cc9, 0x00006d45, 0x00006d17, 0x000067d3, 0x00006f5c,
        0x0000714e, 0x0000717d, 0x000065cb, 0x00007a7f, 0x00007bad, 0x00007dda,
    ],
    [
        0x00007e4a, 0x00007fa8, 0x0000817a, 0x0000821b, 0x00008239, 0x000085a6, 0x00008a6e, 0x00008cce,
        0x00008df5, 0x00009078, 0x00009077, 0x000092ad, 0x00009291, 0x00009583, 0x00009bae, 0x0000524d,
        0x00005584, 0x00006f38, 0x00007136, 0x00005168, 0x00007985, 0x00007e55, 0x000081b3, 0x00007cce,
        0x0000564c, 0x00005851, 0x00005ca8, 0x000063aa, 0x000066fe, 0x000066fd, 0x0000695a, 0x000072d9,
        0x0000758f, 0x0000758e, 0x0000790e, 0x00007956, 0x000079df, 0x00007c97, 0x00007d20, 0x00007d44,
        0x00008607, 0x00008a34, 0x0000963b, 0x00009061, 0x00009f20, 0x000050e7, 0x00005275, 0x000053cc,
        0x000053e2, 0x00005009, 0x000055aa, 0x000058ee, 0x0000594f, 0x0000723d, 0x00005b8b, 0x00005c64,
        0x0000531d, 0x000060e3, 0x000060f3, 0x0000635c, 0x00006383, 0x0000633f, 0x000063bb, 0x000064cd,
        0x000065e9, 0x000066f9, 0x00005de3, 0x000069cd, 0x000069fd, 0x00006f15, 0x000071e5, 0x00004e89,
        0x000075e9, 0x000076f8, 0x00007a93, 0x00007cdf, 0x00007dcf, 0x00007d9c, 0x00008061, 0x00008349,
        0x00008358, 0x0000846c, 0x000084bc, 0x000085fb, 0x000088c5, 0x00008d70, 0x00009001, 0x0000906d,
        0x00009397, 0x0000971c, 0x00009a12, 0x000050cf, 0x00005897, 0x0000618e,
    ],
    [
        0x000081d3, 0x00008535, 0x00008d08, 0x00009020, 0x00004fc3, 0x00005074, 0x00005247, 0x00005373,
        0x0000606f, 0x00006349, 0x0000675f, 0x00006e2c, 0x00008db3, 0x0000901f, 0x00004fd7, 0x00005c5e,
        0x00008cca, 0x000065cf, 0x00007d9a, 0x00005352, 0x00008896, 0x00005176, 0x000063c3, 0x00005b58,
        0x00005b6b, 0x00005c0a, 0x0000640d, 0x00006751, 0x0000905c, 0x00004ed6, 0x0000591a, 0x0000592a,
        0x00006c70, 0x00008a51, 0x0000553e, 0x00005815, 0x000059a5, 0x000060f0, 0x00006253, 0x000067c1,
        0x00008235, 0x00006955, 0x00009640, 0x000099c4, 0x00009a28, 0x00004f53, 0x00005806, 0x00005bfe,
        0x00008010, 0x00005cb1, 0x00005e2f, 0x00005f85, 0x00006020, 0x0000614b, 0x00006234, 0x000066ff,
        0x00006cf0, 0x00006ede, 0x000080ce, 0x0000817f, 0x000082d4, 0x0000888b, 0x00008cb8, 0x00009000,
        0x0000902e, 0x0000968a, 0x00009edb, 0x00009bdb, 0x00004ee3, 0x000053f0, 0x00005927, 0x00007b2c,
        0x0000918d, 0x0000984c, 0x00009df9, 0x00006edd, 0x00007027, 0x00005353, 0x00005544, 0x00005b85,
        0x00006258, 0x0000629e, 0x000062d3, 0x00006ca2, 0x00006fef, 0x00007422, 0x00008a17, 0x00009438,
        0x00006fc1, 0x00008afe, 0x00008338, 0x000051e7, 0x000086f8, 0x000053ea,
    ],
    [
        0x000053e9, 0x00004f46, 0x00009054, 0x00008fb0, 0x0000596a, 0x00008131, 0x00005dfd, 0x00007aea,
        0x00008fbf, 0x000068da, 0x00008c37, 0x000072f8, 0x00009c48, 0x00006a3d, 0x00008ab0, 0x00004e39,
        0x00005358, 0x00005606, 0x00005766, 0x000062c5, 0x000063a2, 0x000065e6, 0x00006b4e, 0x00006de1,
        0x00006e5b, 0x000070ad, 0x000077ed, 0x00007aef, 0x00007baa, 0x00007dbb, 0x0000803d, 0x000080c6,
        0x000086cb, 0x00008a95, 0x0000935b, 0x000056e3, 0x000058c7, 0x00005f3e, 0x000065ad, 0x00006696,
        0x00006a80, 0x00006bb5, 0x00007537, 0x00008ac7, 0x00005024, 0x000077e5, 0x00005730, 0x00005f1b,
        0x00006065, 0x0000667a, 0x00006c60, 0x000075f4, 0x00007a1a, 0x00007f6e, 0x000081f4, 0x00008718,
        0x00009045, 0x000099b3, 0x00007bc9, 0x0000755c, 0x00007af9, 0x00007b51, 0x000084c4, 0x00009010,
        0x000079e9, 0x00007a92, 0x00008336, 0x00005ae1, 0x00007740, 0x00004e2d, 0x00004ef2, 0x00005b99,
        0x00005fe0, 0x000062bd, 0x0000663c, 0x000067f1, 0x00006ce8, 0x0000866b, 0x00008877, 0x00008a3b,
        0x0000914e, 0x000092f3, 0x000099d0, 0x00006a17, 0x00007026, 0x0000732a, 0x000082e7, 0x00008457,
        0x00008caf, 0x00004e01, 0x00005146, 0x000051cb, 0x0000558b, 0x00005bf5,
    ],
    [
        0x00005e16, 0x00005e33, 0x00005e81, 0x00005f14, 0x00005f35, 0x00005f6b, 0x00005fb4, 0x000061f2,
        0x00006311, 0x000066a2, 0x0000671d, 0x00006f6e, 0x00007252, 0x0000753a, 0x0000773a, 0x00008074,
        0x00008139, 0x00008178, 0x00008776, 0x00008abf, 0x00008adc, 0x00008d85, 0x00008df3, 0x0000929a,
        0x00009577, 0x00009802, 0x00009ce5, 0x000052c5, 0x00006357, 0x000076f4, 0x00006715, 0x00006c88,
        0x000073cd, 0x00008cc3, 0x000093ae, 0x00009673, 0x00006d25, 0x0000589c, 0x0000690e, 0x000069cc,
        0x00008ffd, 0x0000939a, 0x000075db, 0x0000901a, 0x0000585a, 0x00006802, 0x000063b4, 0x000069fb,
        0x00004f43, 0x00006f2c, 0x000067d8, 0x00008fbb, 0x00008526, 0x00007db4, 0x00009354, 0x0000693f,
        0x00006f70, 0x0000576a, 0x000058f7, 0x00005b2c, 0x00007d2c, 0x0000722a, 0x0000540a, 0x000091e3,
        0x00009db4, 0x00004ead, 0x00004f4e, 0x0000505c, 0x00005075, 0x00005243, 0x00008c9e, 0x00005448,
        0x00005824, 0x00005b9a, 0x00005e1d, 0x00005e95, 0x00005ead, 0x00005ef7, 0x00005f1f, 0x0000608c,
        0x000062b5, 0x0000633a, 0x000063d0, 0x000068af, 0x00006c40, 0x00007887, 0x0000798e, 0x00007a0b,
        0x00007de0, 0x00008247, 0x00008a02, 0x00008ae6, 0x00008e44, 0x00009013,
    ],
    [
        0x000090b8, 0x0000912d, 0x000091d8, 0x00009f0e, 0x00006ce5, 0x00006458, 0x000064e2, 0x00006575,
        0x00006ef4, 0x00007684, 0x00007b1b, 0x00009069, 0x000093d1, 0x00006eba, 0x000054f2, 0x00005fb9,
        0x000064a4, 0x00008f4d, 0x00008fed, 0x00009244, 0x00005178, 0x0000586b, 0x00005929, 0x00005c55,
        0x00005e97, 0x00006dfb, 0x00007e8f, 0x0000751c, 0x00008cbc, 0x00008ee2, 0x0000985b, 0x000070b9,
        0x00004f1d, 0x00006bbf, 0x00006fb1, 0x00007530, 0x000096fb, 0x0000514e, 0x00005410, 0x00005835,
        0x00005857, 0x000059ac, 0x00005c60, 0x00005f92, 0x00006597, 0x0000675c, 0x00006e21, 0x0000767b,
        0x000083df, 0x00008ced, 0x00009014, 0x000090fd, 0x0000934d, 0x00007825, 0x0000783a, 0x000052aa,
        0x00005ea6, 0x0000571f, 0x00005974, 0x00006012, 0x00005012, 0x0000515a, 0x000051ac, 0x000051cd,
        0x00005200, 0x00005510, 0x00005854, 0x00005858, 0x00005957, 0x00005b95, 0x00005cf6, 0x00005d8b,
        0x000060bc, 0x00006295, 0x0000642d, 0x00006771, 0x00006843, 0x000068bc, 0x000068df, 0x000076d7,
        0x00006dd8, 0x00006e6f, 0x00006d9b, 0x0000706f, 0x000071c8, 0x00005f53, 0x000075d8, 0x00007977,
        0x00007b49, 0x00007b54, 0x00007b52, 0x00007cd6, 0x00007d71, 0x00005230,
    ],
    [
        0x00008463, 0x00008569, 0x000085e4, 0x00008a0e, 0x00008b04, 0x00008c46, 0x00008e0f, 0x00009003,
        0x0000900f, 0x00009419, 0x00009676, 0x0000982d, 0x00009a30, 0x000095d8, 0x000050cd, 0x000052d5,
        0x0000540c, 0x00005802, 0x00005c0e, 0x000061a7, 0x0000649e, 0x00006d1e, 0x000077b3, 0x00007ae5,
        0x000080f4, 0x00008404, 0x00009053, 0x00009285, 0x00005ce0, 0x00009d07, 0x0000533f, 0x00005f97,
        0x00005fb3, 0x00006d9c, 0x00007279, 0x00007763, 0x000079bf, 0x00007be4, 0x00006bd2, 0x000072ec,
        0x00008aad, 0x00006803, 0x00006a61, 0x000051f8, 0x00007a81, 0x00006934, 0x00005c4a, 0x00009cf6,
        0x000082eb, 0x00005bc5, 0x00009149, 0x0000701e, 0x00005678, 0x00005c6f, 0x000060c7, 0x00006566,
        0x00006c8c, 0x00008c5a, 0x00009041, 0x00009813, 0x00005451, 0x000066c7, 0x0000920d, 0x00005948,
        0x000090a3, 0x00005185, 0x00004e4d, 0x000051ea, 0x00008599, 0x00008b0e, 0x00007058, 0x0000637a,
        0x0000934b, 0x00006962, 0x000099b4, 0x00007e04, 0x00007577, 0x00005357, 0x00006960, 0x00008edf,
        0x000096e3, 0x00006c5d, 0x00004e8c, 0x00005c3c, 0x00005f10, 0x00008fe9, 0x00005302, 0x00008cd1,
        0x00008089, 0x00008679, 0x00005eff, 0x000065e5, 0x00004e73, 0x00005165,
    ],
    [
        0x00005982, 0x00005c3f, 0x000097ee, 0x00004efb, 0x0000598a, 0x00005fcd, 0x00008a8d, 0x00006fe1,
        0x000079b0, 0x00007962, 0x00005be7, 0x00008471, 0x0000732b, 0x000071b1, 0x00005e74, 0x00005ff5,
        0x0000637b, 0x0000649a, 0x000071c3, 0x00007c98, 0x00004e43, 0x00005efc, 0x00004e4b, 0x000057dc,
        0x000056a2, 0x000060a9, 0x00006fc3, 0x00007d0d, 0x000080fd, 0x00008133, 0x000081bf, 0x00008fb2,
        0x00008997, 0x000086a4, 0x00005df4, 0x0000628a, 0x000064ad, 0x00008987, 0x00006777, 0x00006ce2,
        0x00006d3e, 0x00007436, 0x00007834, 0x00005a46, 0x00007f75, 0x000082ad, 0x000099ac, 0x00004ff3,
        0x00005ec3, 0x000062dd, 0x00006392, 0x00006557, 0x0000676f, 0x000076c3, 0x0000724c, 0x000080cc,
        0x000080ba, 0x00008f29, 0x0000914d, 0x0000500d, 0x000057f9, 0x00005a92, 0x00006885, 0x00006973,
        0x00007164, 0x000072fd, 0x00008cb7, 0x000058f2, 0x00008ce0, 0x0000966a, 0x00009019, 0x0000877f,
        0x000079e4, 0x000077e7, 0x00008429, 0x00004f2f, 0x00005265, 0x0000535a, 0x000062cd, 0x000067cf,
        0x00006cca, 0x0000767d, 0x00007b94, 0x00007c95, 0x00008236, 0x00008584, 0x00008feb, 0x000066dd,
        0x00006f20, 0x00007206, 0x00007e1b, 0x000083ab, 0x000099c1, 0x00009ea6,
    ],
    [
        0x000051fd, 0x00007bb1, 0x00007872, 0x00007bb8, 0x00008087, 0x00007b48, 0x00006ae8, 0x00005e61,
        0x0000808c, 0x00007551, 0x00007560, 0x0000516b, 0x00009262, 0x00006e8c, 0x0000767a, 0x00009197,
        0x00009aea, 0x00004f10, 0x00007f70, 0x0000629c, 0x00007b4f, 0x000095a5, 0x00009ce9, 0x0000567a,
        0x00005859, 0x000086e4, 0x000096bc, 0x00004f34, 0x00005224, 0x0000534a, 0x000053cd, 0x000053db,
        0x00005e06, 0x0000642c, 0x00006591, 0x0000677f, 0x00006c3e, 0x00006c4e, 0x00007248, 0x000072af,
        0x000073ed, 0x00007554, 0x00007e41, 0x0000822c, 0x000085e9, 0x00008ca9, 0x00007bc4, 0x000091c6,
        0x00007169, 0x00009812, 0x000098ef, 0x0000633d, 0x00006669, 0x0000756a, 0x000076e4, 0x000078d0,
        0x00008543, 0x000086ee, 0x0000532a, 0x00005351, 0x00005426, 0x00005983, 0x00005e87, 0x00005f7c,
        0x000060b2, 0x00006249, 0x00006279, 0x000062ab, 0x00006590, 0x00006bd4, 0x00006ccc, 0x000075b2,
        0x000076ae, 0x00007891, 0x000079d8, 0x00007dcb, 0x00007f77, 0x000080a5, 0x000088ab, 0x00008ab9,
        0x00008cbb, 0x0000907f, 0x0000975e, 0x000098db, 0x00006a0b, 0x00007c38, 0x00005099, 0x00005c3e,
        0x00005fae, 0x00006787, 0x00006bd8, 0x00007435, 0x00007709, 0x00007f8e,
    ],
    [
        0x00009f3b, 0x000067ca, 0x00007a17, 0x00005339, 0x0000758b, 0x00009aed, 0x00005f66, 0x0000819d,
        0x000083f1, 0x00008098, 0x00005f3c, 0x00005fc5, 0x00007562, 0x00007b46, 0x0000903c, 0x00006867,
        0x000059eb, 0x00005a9b, 0x00007d10, 0x0000767e, 0x00008b2c, 0x00004ff5, 0x00005f6a, 0x00006a19,
        0x00006c37, 0x00006f02, 0x000074e2, 0x00007968, 0x00008868, 0x00008a55, 0x00008c79, 0x00005edf,
        0x000063cf, 0x000075c5, 0x000079d2, 0x000082d7, 0x00009328, 0x000092f2, 0x0000849c, 0x000086ed,
        0x00009c2d, 0x000054c1, 0x00005f6c, 0x0000658c, 0x00006d5c, 0x00007015, 0x00008ca7, 0x00008cd3,
        0x0000983b, 0x0000654f, 0x000074f6, 0x00004e0d, 0x00004ed8, 0x000057e0, 0x0000592b, 0x00005a66,
        0x00005bcc, 0x000051a8, 0x00005e03, 0x00005e9c, 0x00006016, 0x00006276, 0x00006577, 0x000065a7,
        0x0000666e, 0x00006d6e, 0x00007236, 0x00007b26, 0x00008150, 0x0000819a, 0x00008299, 0x00008b5c,
        0x00008ca0, 0x00008ce6, 0x00008d74, 0x0000961c, 0x00009644, 0x00004fae, 0x000064ab, 0x00006b66,
        0x0000821e, 0x00008461, 0x0000856a, 0x000090e8, 0x00005c01, 0x00006953, 0x000098a8, 0x0000847a,
        0x00008557, 0x00004f0f, 0x0000526f, 0x00005fa9, 0x00005e45, 0x0000670d,
    ],
    [
        0x0000798f, 0x00008179, 0x00008907, 0x00008986, 0x00006df5, 0x00005f17, 0x00006255, 0x00006cb8,
        0x00004ecf, 0x00007269, 0x00009b92, 0x00005206, 0x0000543b, 0x00005674, 0x000058b3, 0x000061a4,
        0x0000626e, 0x0000711a, 0x0000596e, 0x00007c89, 0x00007cde, 0x00007d1b, 0x000096f0, 0x00006587,
        0x0000805e, 0x00004e19, 0x00004f75, 0x00005175, 0x00005840, 0x00005e63, 0x00005e73, 0x00005f0a,
        0x000067c4, 0x00004e26, 0x0000853d, 0x00009589, 0x0000965b, 0x00007c73, 0x00009801, 0x000050fb,
        0x000058c1, 0x00007656, 0x000078a7, 0x00005225, 0x000077a5, 0x00008511, 0x00007b86, 0x0000504f,
        0x00005909, 0x00007247, 0x00007bc7, 0x00007de8, 0x00008fba, 0x00008fd4, 0x0000904d, 0x00004fbf,
        0x000052c9, 0x00005a29, 0x00005f01, 0x000097ad, 0x00004fdd, 0x00008217, 0x000092ea, 0x00005703,
        0x00006355, 0x00006b69, 0x0000752b, 0x000088dc, 0x00008f14, 0x00007a42, 0x000052df, 0x00005893,
        0x00006155, 0x0000620a, 0x000066ae, 0x00006bcd, 0x00007c3f, 0x000083e9, 0x00005023, 0x00004ff8,
        0x00005305, 0x00005446, 0x00005831, 0x00005949, 0x00005b9d, 0x00005cf0, 0x00005cef, 0x00005d29,
        0x00005e96, 0x000062b1, 0x00006367, 0x0000653e, 0x000065b9, 0x0000670b,
    ],
    [
        0x00006cd5, 0x00006ce1, 0x000070f9, 0x00007832, 0x00007e2b, 0x000080de, 0x000082b3, 0x0000840c,
        0x000084ec, 0x00008702, 0x00008912, 0x00008a2a, 0x00008c4a, 0x000090a6, 0x000092d2, 0x000098fd,
        0x00009cf3, 0x00009d6c, 0x00004e4f, 0x00004ea1, 0x0000508d, 0x00005256, 0x0000574a, 0x000059a8,
        0x00005e3d, 0x00005fd8, 0x00005fd9, 0x0000623f, 0x000066b4, 0x0000671b, 0x000067d0, 0x000068d2,
        0x00005192, 0x00007d21, 0x000080aa, 0x000081a8, 0x00008b00, 0x00008c8c, 0x00008cbf, 0x0000927e,
        0x00009632, 0x00005420, 0x0000982c, 0x00005317, 0x000050d5, 0x0000535c, 0x000058a8, 0x000064b2,
        0x00006734, 0x00007267, 0x00007766, 0x00007a46, 0x000091e6, 0x000052c3, 0x00006ca1, 0x00006b86,
        0x00005800, 0x00005e4c, 0x00005954, 0x0000672c, 0x00007ffb, 0x000051e1, 0x000076c6, 0x00006469,
        0x000078e8, 0x00009b54, 0x00009ebb, 0x000057cb, 0x000059b9, 0x00006627, 0x0000679a, 0x00006bce,
        0x000054e9, 0x000069d9, 0x00005e55, 0x0000819c, 0x00006795, 0x00009baa, 0x000067fe, 0x00009c52,
        0x0000685d, 0x00004ea6, 0x00004fe3, 0x000053c8, 0x000062b9, 0x0000672b, 0x00006cab, 0x00008fc4,
        0x00004fad, 0x00007e6d, 0x00009ebf, 0x00004e07, 0x00006162, 0x00006e80,
    ],
    [
        0x00006f2b, 0x00008513, 0x00005473, 0x0000672a, 0x00009b45, 0x00005df3, 0x00007b95, 0x00005cac,
        0x00005bc6, 0x0000871c, 0x00006e4a, 0x000084d1, 0x00007a14, 0x00008108, 0x00005999, 0x00007c8d,
        0x00006c11, 0x00007720, 0x000052d9, 0x00005922, 0x00007121, 0x0000725f, 0x000077db, 0x00009727,
        0x00009d61, 0x0000690b, 0x00005a7f, 0x00005a18, 0x000051a5, 0x0000540d, 0x0000547d, 0x0000660e,
        0x000076df, 0x00008ff7, 0x00009298, 0x00009cf4, 0x000059ea, 0x0000725d, 0x00006ec5, 0x0000514d,
        0x000068c9, 0x00007dbf, 0x00007dec, 0x00009762, 0x00009eba, 0x00006478, 0x00006a21, 0x00008302,
        0x00005984, 0x00005b5f, 0x00006bdb, 0x0000731b, 0x000076f2, 0x00007db2, 0x00008017, 0x00008499,
        0x00005132, 0x00006728, 0x00009ed9, 0x000076ee, 0x00006762, 0x000052ff, 0x00009905, 0x00005c24,
        0x0000623b, 0x00007c7e, 0x00008cb0, 0x0000554f, 0x000060b6, 0x00007d0b, 0x00009580, 0x00005301,
        0x00004e5f, 0x000051b6, 0x0000591c, 0x0000723a, 0x00008036, 0x000091ce, 0x00005f25, 0x000077e2,
        0x00005384, 0x00005f79, 0x00007d04, 0x000085ac, 0x00008a33, 0x00008e8d, 0x00009756, 0x000067f3,
        0x000085ae, 0x00009453, 0x00006109, 0x00006108, 0x00006cb9, 0x00007652,
    ],
    [
        0x00008aed, 0x00008f38, 0x0000552f, 0x00004f51, 0x0000512a, 0x000052c7, 0x000053cb, 0x00005ba5,
        0x00005e7d, 0x000060a0, 0x00006182, 0x000063d6, 0x00006709, 0x000067da, 0x00006e67, 0x00006d8c,
        0x00007336, 0x00007337, 0x00007531, 0x00007950, 0x000088d5, 0x00008a98, 0x0000904a, 0x00009091,
        0x000090f5, 0x000096c4, 0x0000878d, 0x00005915, 0x00004e88, 0x00004f59, 0x00004e0e, 0x00008a89,
        0x00008f3f, 0x00009810, 0x000050ad, 0x00005e7c, 0x00005996, 0x00005bb9, 0x00005eb8, 0x000063da,
        0x000063fa, 0x000064c1, 0x000066dc, 0x0000694a, 0x000069d8, 0x00006d0b, 0x00006eb6, 0x00007194,
        0x00007528, 0x00007aaf, 0x00007f8a, 0x00008000, 0x00008449, 0x000084c9, 0x00008981, 0x00008b21,
        0x00008e0a, 0x00009065, 0x0000967d, 0x0000990a, 0x0000617e, 0x00006291, 0x00006b32, 0x00006c83,
        0x00006d74, 0x00007fcc, 0x00007ffc, 0x00006dc0, 0x00007f85, 0x000087ba, 0x000088f8, 0x00006765,
        0x000083b1, 0x0000983c, 0x000096f7, 0x00006d1b, 0x00007d61, 0x0000843d, 0x0000916a, 0x00004e71,
        0x00005375, 0x00005d50, 0x00006b04, 0x00006feb, 0x000085cd, 0x0000862d, 0x000089a7, 0x00005229,
        0x0000540f, 0x00005c65, 0x0000674e, 0x000068a8, 0x00007406, 0x00007483,
    ],
    [
        0x000075e2, 0x000088cf, 0x000088e1, 0x000091cc, 0x000096e2, 0x00009678, 0x00005f8b, 0x00007387,
        0x00007acb, 0x0000844e, 0x000063a0, 0x00007565, 0x00005289, 0x00006d41, 0x00006e9c, 0x00007409,
        0x00007559, 0x0000786b, 0x00007c92, 0x00009686, 0x00007adc, 0x00009f8d, 0x00004fb6, 0x0000616e,
        0x000065c5, 0x0000865c, 0x00004e86, 0x00004eae, 0x000050da, 0x00004e21, 0x000051cc, 0x00005bee,
        0x00006599, 0x00006881, 0x00006dbc, 0x0000731f, 0x00007642, 0x000077ad, 0x00007a1c, 0x00007ce7,
        0x0000826f, 0x00008ad2, 0x0000907c, 0x000091cf, 0x00009675, 0x00009818, 0x0000529b, 0x00007dd1,
        0x0000502b, 0x00005398, 0x00006797, 0x00006dcb, 0x000071d0, 0x00007433, 0x000081e8, 0x00008f2a,
        0x000096a3, 0x00009c57, 0x00009e9f, 0x00007460, 0x00005841, 0x00006d99, 0x00007d2f, 0x0000985e,
        0x00004ee4, 0x00004f36, 0x00004f8b, 0x000051b7, 0x000052b1, 0x00005dba, 0x0000601c, 0x000073b2,
        0x0000793c, 0x000082d3, 0x00009234, 0x000096b7, 0x000096f6, 0x0000970a, 0x00009e97, 0x00009f62,
        0x000066a6, 0x00006b74, 0x00005217, 0x000052a3, 0x000070c8, 0x000088c2, 0x00005ec9, 0x0000604b,
        0x00006190, 0x00006f23, 0x00007149, 0x00007c3e, 0x00007df4, 0x0000806f,
    ],
    [
        0x000084ee, 0x00009023, 0x0000932c, 0x00005442, 0x00009b6f, 0x00006ad3, 0x00007089, 0x00008cc2,
        0x00008def, 0x00009732, 0x000052b4, 0x00005a41, 0x00005eca, 0x00005f04, 0x00006717, 0x0000697c,
        0x00006994, 0x00006d6a, 0x00006f0f, 0x00007262, 0x000072fc, 0x00007bed, 0x00008001, 0x0000807e,
        0x0000874b, 0x000090ce, 0x0000516d, 0x00009e93, 0x00007984, 0x0000808b, 0x00009332, 0x00008ad6,
        0x0000502d, 0x0000548c, 0x00008a71, 0x00006b6a, 0x00008cc4, 0x00008107, 0x000060d1, 0x000067a0,
        0x00009df2, 0x00004e99, 0x00004e98, 0x00009c10, 0x00008a6b, 0x000085c1, 0x00008568, 0x00006900,
        0x00006e7e, 0x00007897, 0x00008155, 0x00020b9f, 0x00005b41, 0x00005b56, 0x00005b7d, 0x00005b93,
        0x00005bd8, 0x00005bec, 0x00005c12, 0x00005c1e, 0x00005c23, 0x00005c2b, 0x0000378d, 0x00005c62,
        0x0000fa3b, 0x0000fa3c, 0x000216b4, 0x00005c7a, 0x00005c8f, 0x00005c9f, 0x00005ca3, 0x00005caa,
        0x00005cba, 0x00005ccb, 0x00005cd0, 0x00005cd2, 0x00005cf4, 0x00021e34, 0x000037e2, 0x00005d0d,
        0x00005d27, 0x0000fa11, 0x00005d46, 0x00005d47, 0x00005d53, 0x00005d4a, 0x00005d6d, 0x00005d81,
        0x00005da0, 0x00005da4, 0x00005da7, 0x00005db8, 0x00005dcb, 0x0000541e,
    ],
    [
        0x00005f0c, 0x00004e10, 0x00004e15, 0x00004e2a, 0x00004e31, 0x00004e36, 0x00004e3c, 0x00004e3f,
        0x00004e42, 0x00004e56, 0x00004e58, 0x00004e82, 0x00004e85, 0x00008c6b, 0x00004e8a, 0x00008212,
        0x00005f0d, 0x00004e8e, 0x00004e9e, 0x00004e9f, 0x00004ea0, 0x00004ea2, 0x00004eb0, 0x00004eb3,
        0x00004eb6, 0x00004ece, 0x00004ecd, 0x00004ec4, 0x00004ec6, 0x00004ec2, 0x00004ed7, 0x00004ede,
        0x00004eed, 0x00004edf, 0x00004ef7, 0x00004f09, 0x00004f5a, 0x00004f30, 0x00004f5b, 0x00004f5d,
        0x00004f57, 0x00004f47, 0x00004f76, 0x00004f88, 0x00004f8f, 0x00004f98, 0x00004f7b, 0x00004f69,
        0x00004f70, 0x00004f91, 0x00004f6f, 0x00004f86, 0x00004f96, 0x00005118, 0x00004fd4, 0x00004fdf,
        0x00004fce, 0x00004fd8, 0x00004fdb, 0x00004fd1, 0x00004fda, 0x00004fd0, 0x00004fe4, 0x00004fe5,
        0x0000501a, 0x00005028, 0x00005014, 0x0000502a, 0x00005025, 0x00005005, 0x00004f1c, 0x00004ff6,
        0x00005021, 0x00005029, 0x0000502c, 0x00004ffe, 0x00004fef, 0x00005011, 0x00005006, 0x00005043,
        0x00005047, 0x00006703, 0x00005055, 0x00005050, 0x00005048, 0x0000505a, 0x00005056, 0x0000506c,
        0x00005078, 0x00005080, 0x0000509a, 0x00005085, 0x000050b4, 0x000050b2,
    ],
    [
        0x000050c9, 0x000050ca, 0x000050b3, 0x000050c2, 0x000050d6, 0x000050de, 0x000050e5, 0x000050ed,
        0x000050e3, 0x000050ee, 0x000050f9, 0x000050f5, 0x00005109, 0x00005101, 0x00005102, 0x00005116,
        0x00005115, 0x00005114, 0x0000511a, 0x00005121, 0x0000513a, 0x00005137, 0x0000513c, 0x0000513b,
        0x0000513f, 0x00005140, 0x00005152, 0x0000514c, 0x00005154, 0x00005162, 0x00007af8, 0x00005169,
        0x0000516a, 0x0000516e, 0x00005180, 0x00005182, 0x000056d8, 0x0000518c, 0x00005189, 0x0000518f,
        0x00005191, 0x00005193, 0x00005195, 0x00005196, 0x000051a4, 0x000051a6, 0x000051a2, 0x000051a9,
        0x000051aa, 0x000051ab, 0x000051b3, 0x000051b1, 0x000051b2, 0x000051b0, 0x000051b5, 0x000051bd,
        0x000051c5, 0x000051c9, 0x000051db, 0x000051e0, 0x00008655, 0x000051e9, 0x000051ed, 0x000051f0,
        0x000051f5, 0x000051fe, 0x00005204, 0x0000520b, 0x00005214, 0x0000520e, 0x00005227, 0x0000522a,
        0x0000522e, 0x00005233, 0x00005239, 0x0000524f, 0x00005244, 0x0000524b, 0x0000524c, 0x0000525e,
        0x00005254, 0x0000526a, 0x00005274, 0x00005269, 0x00005273, 0x0000527f, 0x0000527d, 0x0000528d,
        0x00005294, 0x00005292, 0x00005271, 0x00005288, 0x00005291, 0x00008fa8,
    ],
    [
        0x00008fa7, 0x000052ac, 0x000052ad, 0x000052bc, 0x000052b5, 0x000052c1, 0x000052cd, 0x000052d7,
        0x000052de, 0x000052e3, 0x000052e6, 0x000098ed, 0x000052e0, 0x000052f3, 0x000052f5, 0x000052f8,
        0x000052f9, 0x00005306, 0x00005308, 0x00007538, 0x0000530d, 0x00005310, 0x0000530f, 0x00005315,
        0x0000531a, 0x00005323, 0x0000532f, 0x00005331, 0x00005333, 0x00005338, 0x00005340, 0x00005346,
        0x00005345, 0x00004e17, 0x00005349, 0x0000534d, 0x000051d6, 0x0000535e, 0x00005369, 0x0000536e,
        0x00005918, 0x0000537b, 0x00005377, 0x00005382, 0x00005396, 0x000053a0, 0x000053a6, 0x000053a5,
        0x000053ae, 0x000053b0, 0x000053b6, 0x000053c3, 0x00007c12, 0x000096d9, 0x000053df, 0x000066fc,
        0x000071ee, 0x000053ee, 0x000053e8, 0x000053ed, 0x000053fa, 0x00005401, 0x0000543d, 0x00005440,
        0x0000542c, 0x0000542d, 0x0000543c, 0x0000542e, 0x00005436, 0x00005429, 0x0000541d, 0x0000544e,
        0x0000548f, 0x00005475, 0x0000548e, 0x0000545f, 0x00005471, 0x00005477, 0x00005470, 0x00005492,
        0x0000547b, 0x00005480, 0x00005476, 0x00005484, 0x00005490, 0x00005486, 0x000054c7, 0x000054a2,
        0x000054b8, 0x000054a5, 0x000054ac, 0x000054c4, 0x000054c8, 0x000054a8,
    ],
    [
        0x000054ab, 0x000054c2, 0x000054a4, 0x000054be, 0x000054bc, 0x000054d8, 0x000054e5, 0x000054e6,
        0x0000550f, 0x00005514, 0x000054fd, 0x000054ee, 0x000054ed, 0x000054fa, 0x000054e2, 0x00005539,
        0x00005540, 0x00005563, 0x0000554c, 0x0000552e, 0x0000555c, 0x00005545, 0x00005556, 0x00005557,
        0x00005538, 0x00005533, 0x0000555d, 0x00005599, 0x00005580, 0x000054af, 0x0000558a, 0x0000559f,
        0x0000557b, 0x0000557e, 0x00005598, 0x0000559e, 0x000055ae, 0x0000557c, 0x00005583, 0x000055a9,
        0x00005587, 0x000055a8, 0x000055da, 0x000055c5, 0x000055df, 0x000055c4, 0x000055dc, 0x000055e4,
        0x000055d4, 0x00005614, 0x000055f7, 0x00005616, 0x000055fe, 0x000055fd, 0x0000561b, 0x000055f9,
        0x0000564e, 0x00005650, 0x000071df, 0x00005634, 0x00005636, 0x00005632, 0x00005638, 0x0000566b,
        0x00005664, 0x0000562f, 0x0000566c, 0x0000566a, 0x00005686, 0x00005680, 0x0000568a, 0x000056a0,
        0x00005694, 0x0000568f, 0x000056a5, 0x000056ae, 0x000056b6, 0x000056b4, 0x000056c2, 0x000056bc,
        0x000056c1, 0x000056c3, 0x000056c0, 0x000056c8, 0x000056ce, 0x000056d1, 0x000056d3, 0x000056d7,
        0x000056ee, 0x000056f9, 0x00005700, 0x000056ff, 0x00005704, 0x00005709,
    ],
    [
        0x00005708, 0x0000570b, 0x0000570d, 0x00005713, 0x00005718, 0x00005716, 0x000055c7, 0x0000571c,
        0x00005726, 0x00005737, 0x00005738, 0x0000574e, 0x0000573b, 0x00005740, 0x0000574f, 0x00005769,
        0x000057c0, 0x00005788, 0x00005761, 0x0000577f, 0x00005789, 0x00005793, 0x000057a0, 0x000057b3,
        0x000057a4, 0x000057aa, 0x000057b0, 0x000057c3, 0x000057c6, 0x000057d4, 0x000057d2, 0x000057d3,
        0x0000580a, 0x000057d6, 0x000057e3, 0x0000580b, 0x00005819, 0x0000581d, 0x00005872, 0x00005821,
        0x00005862, 0x0000584b, 0x00005870, 0x00006bc0, 0x00005852, 0x0000583d, 0x00005879, 0x00005885,
        0x000058b9, 0x0000589f, 0x000058ab, 0x000058ba, 0x000058de, 0x000058bb, 0x000058b8, 0x000058ae,
        0x000058c5, 0x000058d3, 0x000058d1, 0x000058d7, 0x000058d9, 0x000058d8, 0x000058e5, 0x000058dc,
        0x000058e4, 0x000058df, 0x000058ef, 0x000058fa, 0x000058f9, 0x000058fb, 0x000058fc, 0x000058fd,
        0x00005902, 0x0000590a, 0x00005910, 0x0000591b, 0x000068a6, 0x00005925, 0x0000592c, 0x0000592d,
        0x00005932, 0x00005938, 0x0000593e, 0x00007ad2, 0x00005955, 0x00005950, 0x0000594e, 0x0000595a,
        0x00005958, 0x00005962, 0x00005960, 0x00005967, 0x0000596c, 0x00005969,
    ],
    [
        0x00005978, 0x00005981, 0x0000599d, 0x00004f5e, 0x00004fab, 0x000059a3, 0x000059b2, 0x000059c6,
        0x000059e8, 0x000059dc, 0x0000598d, 0x000059d9, 0x000059da, 0x00005a25, 0x00005a1f, 0x00005a11,
        0x00005a1c, 0x00005a09, 0x00005a1a, 0x00005a40, 0x00005a6c, 0x00005a49, 0x00005a35, 0x00005a36,
        0x00005a62, 0x00005a6a, 0x00005a9a, 0x00005abc, 0x00005abe, 0x00005acb, 0x00005ac2, 0x00005abd,
        0x00005ae3, 0x00005ad7, 0x00005ae6, 0x00005ae9, 0x00005ad6, 0x00005afa, 0x00005afb, 0x00005b0c,
        0x00005b0b, 0x00005b16, 0x00005b32, 0x00005ad0, 0x00005b2a, 0x00005b36, 0x00005b3e, 0x00005b43,
        0x00005b45, 0x00005b40, 0x00005b51, 0x00005b55, 0x00005b5a, 0x00005b5b, 0x00005b65, 0x00005b69,
        0x00005b70, 0x00005b73, 0x00005b75, 0x00005b78, 0x00006588, 0x00005b7a, 0x00005b80, 0x00005b83,
        0x00005ba6, 0x00005bb8, 0x00005bc3, 0x00005bc7, 0x00005bc9, 0x00005bd4, 0x00005bd0, 0x00005be4,
        0x00005be6, 0x00005be2, 0x00005bde, 0x00005be5, 0x00005beb, 0x00005bf0, 0x00005bf6, 0x00005bf3,
        0x00005c05, 0x00005c07, 0x00005c08, 0x00005c0d, 0x00005c13, 0x00005c20, 0x00005c22, 0x00005c28,
        0x00005c38, 0x00005c39, 0x00005c41, 0x00005c46, 0x00005c4e, 0x00005c53,
    ],
    [
        0x00005c50, 0x00005c4f, 0x00005b71, 0x00005c6c, 0x00005c6e, 0x00004e62, 0x00005c76, 0x00005c79,
        0x00005c8c, 0x00005c91, 0x00005c94, 0x0000599b, 0x00005cab, 0x00005cbb, 0x00005cb6, 0x00005cbc,
        0x00005cb7, 0x00005cc5, 0x00005cbe, 0x00005cc7, 0x00005cd9, 0x00005ce9, 0x00005cfd, 0x00005cfa,
        0x00005ced, 0x00005d8c, 0x00005cea, 0x00005d0b, 0x00005d15, 0x00005d17, 0x00005d5c, 0x00005d1f,
        0x00005d1b, 0x00005d11, 0x00005d14, 0x00005d22, 0x00005d1a, 0x00005d19, 0x00005d18, 0x00005d4c,
        0x00005d52, 0x00005d4e, 0x00005d4b, 0x00005d6c, 0x00005d73, 0x00005d76, 0x00005d87, 0x00005d84,
        0x00005d82, 0x00005da2, 0x00005d9d, 0x00005dac, 0x00005dae, 0x00005dbd, 0x00005d90, 0x00005db7,
        0x00005dbc, 0x00005dc9, 0x00005dcd, 0x00005dd3, 0x00005dd2, 0x00005dd6, 0x00005ddb, 0x00005deb,
        0x00005df2, 0x00005df5, 0x00005e0b, 0x00005e1a, 0x00005e19, 0x00005e11, 0x00005e1b, 0x00005e36,
        0x00005e37, 0x00005e44, 0x00005e43, 0x00005e40, 0x00005e4e, 0x00005e57, 0x00005e54, 0x00005e5f,
        0x00005e62, 0x00005e64, 0x00005e47, 0x00005e75, 0x00005e76, 0x00005e7a, 0x00009ebc, 0x00005e7f,
        0x00005ea0, 0x00005ec1, 0x00005ec2, 0x00005ec8, 0x00005ed0, 0x00005ecf,
    ],
    [
        0x00005ed6, 0x00005ee3, 0x00005edd, 0x00005eda, 0x00005edb, 0x00005ee2, 0x00005ee1, 0x00005ee8,
        0x00005ee9, 0x00005eec, 0x00005ef1, 0x00005ef3, 0x00005ef0, 0x00005ef4, 0x00005ef8, 0x00005efe,
        0x00005f03, 0x00005f09, 0x00005f5d, 0x00005f5c, 0x00005f0b, 0x00005f11, 0x00005f16, 0x00005f29,
        0x00005f2d, 0x00005f38, 0x00005f41, 0x00005f48, 0x00005f4c, 0x00005f4e, 0x00005f2f, 0x00005f51,
        0x00005f56, 0x00005f57, 0x00005f59, 0x00005f61, 0x00005f6d, 0x00005f73, 0x00005f77, 0x00005f83,
        0x00005f82, 0x00005f7f, 0x00005f8a, 0x00005f88, 0x00005f91, 0x00005f87, 0x00005f9e, 0x00005f99,
        0x00005f98, 0x00005fa0, 0x00005fa8, 0x00005fad, 0x00005fbc, 0x00005fd6, 0x00005ffb, 0x00005fe4,
        0x00005ff8, 0x00005ff1, 0x00005fdd, 0x000060b3, 0x00005fff, 0x00006021, 0x00006060, 0x00006019,
        0x00006010, 0x00006029, 0x0000600e, 0x00006031, 0x0000601b, 0x00006015, 0x0000602b, 0x00006026,
        0x0000600f, 0x0000603a, 0x0000605a, 0x00006041, 0x0000606a, 0x00006077, 0x0000605f, 0x0000604a,
        0x00006046, 0x0000604d, 0x00006063, 0x00006043, 0x00006064, 0x00006042, 0x0000606c, 0x0000606b,
        0x00006059, 0x00006081, 0x0000608d, 0x000060e7, 0x00006083, 0x0000609a,
    ],
    [
        0x00006084, 0x0000609b, 0x00006096, 0x00006097, 0x00006092, 0x000060a7, 0x0000608b, 0x000060e1,
        0x000060b8, 0x000060e0, 0x000060d3, 0x000060b4, 0x00005ff0, 0x000060bd, 0x000060c6, 0x000060b5,
        0x000060d8, 0x0000614d, 0x00006115, 0x00006106, 0x000060f6, 0x000060f7, 0x00006100, 0x000060f4,
        0x000060fa, 0x00006103, 0x00006121, 0x000060fb, 0x000060f1, 0x0000610d, 0x0000610e, 0x00006147,
        0x0000613e, 0x00006128, 0x00006127, 0x0000614a, 0x0000613f, 0x0000613c, 0x0000612c, 0x00006134,
        0x0000613d, 0x00006142, 0x00006144, 0x00006173, 0x00006177, 0x00006158, 0x00006159, 0x0000615a,
        0x0000616b, 0x00006174, 0x0000616f, 0x00006165, 0x00006171, 0x0000615f, 0x0000615d, 0x00006153,
        0x00006175, 0x00006199, 0x00006196, 0x00006187, 0x000061ac, 0x00006194, 0x0000619a, 0x0000618a,
        0x00006191, 0x000061ab, 0x000061ae, 0x000061cc, 0x000061ca, 0x000061c9, 0x000061f7, 0x000061c8,
        0x000061c3, 0x000061c6, 0x000061ba, 0x000061cb, 0x00007f79, 0x000061cd, 0x000061e6, 0x000061e3,
        0x000061f6, 0x000061fa, 0x000061f4, 0x000061ff, 0x000061fd, 0x000061fc, 0x000061fe, 0x00006200,
        0x00006208, 0x00006209, 0x0000620d, 0x0000620c, 0x00006214, 0x0000621b,
    ],
    [
        0x0000621e, 0x00006221, 0x0000622a, 0x0000622e, 0x00006230, 0x00006232, 0x00006233, 0x00006241,
        0x0000624e, 0x0000625e, 0x00006263, 0x0000625b, 0x00006260, 0x00006268, 0x0000627c, 0x00006282,
        0x00006289, 0x0000627e, 0x00006292, 0x00006293, 0x00006296, 0x000062d4, 0x00006283, 0x00006294,
        0x000062d7, 0x000062d1, 0x000062bb, 0x000062cf, 0x000062ff, 0x000062c6, 0x000064d4, 0x000062c8,
        0x000062dc, 0x000062cc, 0x000062ca, 0x000062c2, 0x000062c7, 0x0000629b, 0x000062c9, 0x0000630c,
        0x000062ee, 0x000062f1, 0x00006327, 0x00006302, 0x00006308, 0x000062ef, 0x000062f5, 0x00006350,
        0x0000633e, 0x0000634d, 0x0000641c, 0x0000634f, 0x00006396, 0x0000638e, 0x00006380, 0x000063ab,
        0x00006376, 0x000063a3, 0x0000638f, 0x00006389, 0x0000639f, 0x000063b5, 0x0000636b, 0x00006369,
        0x000063be, 0x000063e9, 0x000063c0, 0x000063c6, 0x000063e3, 0x000063c9, 0x000063d2, 0x000063f6,
        0x000063c4, 0x00006416, 0x00006434, 0x00006406, 0x00006413, 0x00006426, 0x00006436, 0x0000651d,
        0x00006417, 0x00006428, 0x0000640f, 0x00006467, 0x0000646f, 0x00006476, 0x0000644e, 0x0000652a,
        0x00006495, 0x00006493, 0x000064a5, 0x000064a9, 0x00006488, 0x000064bc,
    ],
    [
        0x000064da, 0x000064d2, 0x000064c5, 0x000064c7, 0x000064bb, 0x000064d8, 0x000064c2, 0x000064f1,
        0x000064e7, 0x00008209, 0x000064e0, 0x000064e1, 0x000062ac, 0x000064e3, 0x000064ef, 0x0000652c,
        0x000064f6, 0x000064f4, 0x000064f2, 0x000064fa, 0x00006500, 0x000064fd, 0x00006518, 0x0000651c,
        0x00006505, 0x00006524, 0x00006523, 0x0000652b, 0x00006534, 0x00006535, 0x00006537, 0x00006536,
        0x00006538, 0x0000754b, 0x00006548, 0x00006556, 0x00006555, 0x0000654d, 0x00006558, 0x0000655e,
        0x0000655d, 0x00006572, 0x00006578, 0x00006582, 0x00006583, 0x00008b8a, 0x0000659b, 0x0000659f,
        0x000065ab, 0x000065b7, 0x000065c3, 0x000065c6, 0x000065c1, 0x000065c4, 0x000065cc, 0x000065d2,
        0x000065db, 0x000065d9, 0x000065e0, 0x000065e1, 0x000065f1, 0x00006772, 0x0000660a, 0x00006603,
        0x000065fb, 0x00006773, 0x00006635, 0x00006636, 0x00006634, 0x0000661c, 0x0000664f, 0x00006644,
        0x00006649, 0x00006641, 0x0000665e, 0x0000665d, 0x00006664, 0x00006667, 0x00006668, 0x0000665f,
        0x00006662, 0x00006670, 0x00006683, 0x00006688, 0x0000668e, 0x00006689, 0x00006684, 0x00006698,
        0x0000669d, 0x000066c1, 0x000066b9, 0x000066c9, 0x000066be, 0x000066bc,
    ],
    [
        0x000066c4, 0x000066b8, 0x000066d6, 0x000066da, 0x000066e0, 0x0000663f, 0x000066e6, 0x000066e9,
        0x000066f0, 0x000066f5, 0x000066f7, 0x0000670f, 0x00006716, 0x0000671e, 0x00006726, 0x00006727,
        0x00009738, 0x0000672e, 0x0000673f, 0x00006736, 0x00006741, 0x00006738, 0x00006737, 0x00006746,
        0x0000675e, 0x00006760, 0x00006759, 0x00006763, 0x00006764, 0x00006789, 0x00006770, 0x000067a9,
        0x0000677c, 0x0000676a, 0x0000678c, 0x0000678b, 0x000067a6, 0x000067a1, 0x00006785, 0x000067b7,
        0x000067ef, 0x000067b4, 0x000067ec, 0x000067b3, 0x000067e9, 0x000067b8, 0x000067e4, 0x000067de,
        0x000067dd, 0x000067e2, 0x000067ee, 0x000067b9, 0x000067ce, 0x000067c6, 0x000067e7, 0x00006a9c,
        0x0000681e, 0x00006846, 0x00006829, 0x00006840, 0x0000684d, 0x00006832, 0x0000684e, 0x000068b3,
        0x0000682b, 0x00006859, 0x00006863, 0x00006877, 0x0000687f, 0x0000689f, 0x0000688f, 0x000068ad,
        0x00006894, 0x0000689d, 0x0000689b, 0x00006883, 0x00006aae, 0x000068b9, 0x00006874, 0x000068b5,
        0x000068a0, 0x000068ba, 0x0000690f, 0x0000688d, 0x0000687e, 0x00006901, 0x000068ca, 0x00006908,
        0x000068d8, 0x00006922, 0x00006926, 0x000068e1, 0x0000690c, 0x000068cd,
    ],
    [
        0x000068d4, 0x000068e7, 0x000068d5, 0x00006936, 0x00006912, 0x00006904, 0x000068d7, 0x000068e3,
        0x00006925, 0x000068f9, 0x000068e0, 0x000068ef, 0x00006928, 0x0000692a, 0x0000691a, 0x00006923,
        0x00006921, 0x000068c6, 0x00006979, 0x00006977, 0x0000695c, 0x00006978, 0x0000696b, 0x00006954,
        0x0000697e, 0x0000696e, 0x00006939, 0x00006974, 0x0000693d, 0x00006959, 0x00006930, 0x00006961,
        0x0000695e, 0x0000695d, 0x00006981, 0x0000696a, 0x000069b2, 0x000069ae, 0x000069d0, 0x000069bf,
        0x000069c1, 0x000069d3, 0x000069be, 0x000069ce, 0x00005be8, 0x000069ca, 0x000069dd, 0x000069bb,
        0x000069c3, 0x000069a7, 0x00006a2e, 0x00006991, 0x000069a0, 0x0000699c, 0x00006995, 0x000069b4,
        0x000069de, 0x000069e8, 0x00006a02, 0x00006a1b, 0x000069ff, 0x00006b0a, 0x000069f9, 0x000069f2,
        0x000069e7, 0x00006a05, 0x000069b1, 0x00006a1e, 0x000069ed, 0x00006a14, 0x000069eb, 0x00006a0a,
        0x00006a12, 0x00006ac1, 0x00006a23, 0x00006a13, 0x00006a44, 0x00006a0c, 0x00006a72, 0x00006a36,
        0x00006a78, 0x00006a47, 0x00006a62, 0x00006a59, 0x00006a66, 0x00006a48, 0x00006a38, 0x00006a22,
        0x00006a90, 0x00006a8d, 0x00006aa0, 0x00006a84, 0x00006aa2, 0x00006aa3,
    ],
    [
        0x00006a97, 0x00008617, 0x00006abb, 0x00006ac3, 0x00006ac2, 0x00006ab8, 0x00006ab3, 0x00006aac,
        0x00006ade, 0x00006ad1, 0x00006adf, 0x00006aaa, 0x00006ada, 0x00006aea, 0x00006afb, 0x00006b05,
        0x00008616, 0x00006afa, 0x00006b12, 0x00006b16, 0x00009b31, 0x00006b1f, 0x00006b38, 0x00006b37,
        0x000076dc, 0x00006b39, 0x000098ee, 0x00006b47, 0x00006b43, 0x00006b49, 0x00006b50, 0x00006b59,
        0x00006b54, 0x00006b5b, 0x00006b5f, 0x00006b61, 0x00006b78, 0x00006b79, 0x00006b7f, 0x00006b80,
        0x00006b84, 0x00006b83, 0x00006b8d, 0x00006b98, 0x00006b95, 0x00006b9e, 0x00006ba4, 0x00006baa,
        0x00006bab, 0x00006baf, 0x00006bb2, 0x00006bb1, 0x00006bb3, 0x00006bb7, 0x00006bbc, 0x00006bc6,
        0x00006bcb, 0x00006bd3, 0x00006bdf, 0x00006bec, 0x00006beb, 0x00006bf3, 0x00006bef, 0x00009ebe,
        0x00006c08, 0x00006c13, 0x00006c14, 0x00006c1b, 0x00006c24, 0x00006c23, 0x00006c5e, 0x00006c55,
        0x00006c62, 0x00006c6a, 0x00006c82, 0x00006c8d, 0x00006c9a, 0x00006c81, 0x00006c9b, 0x00006c7e,
        0x00006c68, 0x00006c73, 0x00006c92, 0x00006c90, 0x00006cc4, 0x00006cf1, 0x00006cd3, 0x00006cbd,
        0x00006cd7, 0x00006cc5, 0x00006cdd, 0x00006cae, 0x00006cb1, 0x00006cbe,
    ],
    [
        0x00006cba, 0x00006cdb, 0x00006cef, 0x00006cd9, 0x00006cea, 0x00006d1f, 0x0000884d, 0x00006d36,
        0x00006d2b, 0x00006d3d, 0x00006d38, 0x00006d19, 0x00006d35, 0x00006d33, 0x00006d12, 0x00006d0c,
        0x00006d63, 0x00006d93, 0x00006d64, 0x00006d5a, 0x00006d79, 0x00006d59, 0x00006d8e, 0x00006d95,
        0x00006fe4, 0x00006d85, 0x00006df9, 0x00006e15, 0x00006e0a, 0x00006db5, 0x00006dc7, 0x00006de6,
        0x00006db8, 0x00006dc6, 0x00006dec, 0x00006dde, 0x00006dcc, 0x00006de8, 0x00006dd2, 0x00006dc5,
        0x00006dfa, 0x00006dd9, 0x00006de4, 0x00006dd5, 0x00006dea, 0x00006dee, 0x00006e2d, 0x00006e6e,
        0x00006e2e, 0x00006e19, 0x00006e72, 0x00006e5f, 0x00006e3e, 0x00006e23, 0x00006e6b, 0x00006e2b,
        0x00006e76, 0x00006e4d, 0x00006e1f, 0x00006e43, 0x00006e3a, 0x00006e4e, 0x00006e24, 0x00006eff,
        0x00006e1d, 0x00006e38, 0x00006e82, 0x00006eaa, 0x00006e98, 0x00006ec9, 0x00006eb7, 0x00006ed3,
        0x00006ebd, 0x00006eaf, 0x00006ec4, 0x00006eb2, 0x00006ed4, 0x00006ed5, 0x00006e8f, 0x00006ea5,
        0x00006ec2, 0x00006e9f, 0x00006f41, 0x00006f11, 0x0000704c, 0x00006eec, 0x00006ef8, 0x00006efe,
        0x00006f3f, 0x00006ef2, 0x00006f31, 0x00006eef, 0x00006f32, 0x00006ecc,
    ],
    [
        0x00006f3e, 0x00006f13, 0x00006ef7, 0x00006f86, 0x00006f7a, 0x00006f78, 0x00006f81, 0x00006f80,
        0x00006f6f, 0x00006f5b, 0x00006ff3, 0x00006f6d, 0x00006f82, 0x00006f7c, 0x00006f58, 0x00006f8e,
        0x00006f91, 0x00006fc2, 0x00006f66, 0x00006fb3, 0x00006fa3, 0x00006fa1, 0x00006fa4, 0x00006fb9,
        0x00006fc6, 0x00006faa, 0x00006fdf, 0x00006fd5, 0x00006fec, 0x00006fd4, 0x00006fd8, 0x00006ff1,
        0x00006fee, 0x00006fdb, 0x00007009, 0x0000700b, 0x00006ffa, 0x00007011, 0x00007001, 0x0000700f,
        0x00006ffe, 0x0000701b, 0x0000701a, 0x00006f74, 0x0000701d, 0x00007018, 0x0000701f, 0x00007030,
        0x0000703e, 0x00007032, 0x00007051, 0x00007063, 0x00007099, 0x00007092, 0x000070af, 0x000070f1,
        0x000070ac, 0x000070b8, 0x000070b3, 0x000070ae, 0x000070df, 0x000070cb, 0x000070dd, 0x000070d9,
        0x00007109, 0x000070fd, 0x0000711c, 0x00007119, 0x00007165, 0x00007155, 0x00007188, 0x00007166,
        0x00007162, 0x0000714c, 0x00007156, 0x0000716c, 0x0000718f, 0x000071fb, 0x00007184, 0x00007195,
        0x000071a8, 0x000071ac, 0x000071d7, 0x000071b9, 0x000071be, 0x000071d2, 0x000071c9, 0x000071d4,
        0x000071ce, 0x000071e0, 0x000071ec, 0x000071e7, 0x000071f5, 0x000071fc,
    ],
    [
        0x000071f9, 0x000071ff, 0x0000720d, 0x00007210, 0x0000721b, 0x00007228, 0x0000722d, 0x0000722c,
        0x00007230, 0x00007232, 0x0000723b, 0x0000723c, 0x0000723f, 0x00007240, 0x00007246, 0x0000724b,
        0x00007258, 0x00007274, 0x0000727e, 0x00007282, 0x00007281, 0x00007287, 0x00007292, 0x00007296,
        0x000072a2, 0x000072a7, 0x000072b9, 0x000072b2, 0x000072c3, 0x000072c6, 0x000072c4, 0x000072ce,
        0x000072d2, 0x000072e2, 0x000072e0, 0x000072e1, 0x000072f9, 0x000072f7, 0x0000500f, 0x00007317,
        0x0000730a, 0x0000731c, 0x00007316, 0x0000731d, 0x00007334, 0x0000732f, 0x00007329, 0x00007325,
        0x0000733e, 0x0000734e, 0x0000734f, 0x00009ed8, 0x00007357, 0x0000736a, 0x00007368, 0x00007370,
        0x00007378, 0x00007375, 0x0000737b, 0x0000737a, 0x000073c8, 0x000073b3, 0x000073ce, 0x000073bb,
        0x000073c0, 0x000073e5, 0x000073ee, 0x000073de, 0x000074a2, 0x00007405, 0x0000746f, 0x00007425,
        0x000073f8, 0x00007432, 0x0000743a, 0x00007455, 0x0000743f, 0x0000745f, 0x00007459, 0x00007441,
        0x0000745c, 0x00007469, 0x00007470, 0x00007463, 0x0000746a, 0x00007476, 0x0000747e, 0x0000748b,
        0x0000749e, 0x000074a7, 0x000074ca, 0x000074cf, 0x000074d4, 0x000073f1,
    ],
    [
        0x000074e0, 0x000074e3, 0x000074e7, 0x000074e9, 0x000074ee, 0x000074f2, 0x000074f0, 0x000074f1,
        0x000074f8, 0x000074f7, 0x00007504, 0x00007503, 0x00007505, 0x0000750c, 0x0000750e, 0x0000750d,
        0x00007515, 0x00007513, 0x0000751e, 0x00007526, 0x0000752c, 0x0000753c, 0x00007544, 0x0000754d,
        0x0000754a, 0x00007549, 0x0000755b, 0x00007546, 0x0000755a, 0x00007569, 0x00007564, 0x00007567,
        0x0000756b, 0x0000756d, 0x00007578, 0x00007576, 0x00007586, 0x00007587, 0x00007574, 0x0000758a,
        0x00007589, 0x00007582, 0x00007594, 0x0000759a, 0x0000759d, 0x000075a5, 0x000075a3, 0x000075c2,
        0x000075b3, 0x000075c3, 0x000075b5, 0x000075bd, 0x000075b8, 0x000075bc, 0x000075b1, 0x000075cd,
        0x000075ca, 0x000075d2, 0x000075d9, 0x000075e3, 0x000075de, 0x000075fe, 0x000075ff, 0x000075fc,
        0x00007601, 0x000075f0, 0x000075fa, 0x000075f2, 0x000075f3, 0x0000760b, 0x0000760d, 0x00007609,
        0x0000761f, 0x00007627, 0x00007620, 0x00007621, 0x00007622, 0x00007624, 0x00007634, 0x00007630,
        0x0000763b, 0x00007647, 0x00007648, 0x00007646, 0x0000765c, 0x00007658, 0x00007661, 0x00007662,
        0x00007668, 0x00007669, 0x0000766a, 0x00007667, 0x0000766c, 0x00007670,
    ],
    [
        0x00007672, 0x00007676, 0x00007678, 0x0000767c, 0x00007680, 0x00007683, 0x00007688, 0x0000768b,
        0x0000768e, 0x00007696, 0x00007693, 0x00007699, 0x0000769a, 0x000076b0, 0x000076b4, 0x000076b8,
        0x000076b9, 0x000076ba, 0x000076c2, 0x000076cd, 0x000076d6, 0x000076d2, 0x000076de, 0x000076e1,
        0x000076e5, 0x000076e7, 0x000076ea, 0x0000862f, 0x000076fb, 0x00007708, 0x00007707, 0x00007704,
        0x00007729, 0x00007724, 0x0000771e, 0x00007725, 0x00007726, 0x0000771b, 0x00007737, 0x00007738,
        0x00007747, 0x0000775a, 0x00007768, 0x0000776b, 0x0000775b, 0x00007765, 0x0000777f, 0x0000777e,
        0x00007779, 0x0000778e, 0x0000778b, 0x00007791, 0x000077a0, 0x0000779e, 0x000077b0, 0x000077b6,
        0x000077b9, 0x000077bf, 0x000077bc, 0x000077bd, 0x000077bb, 0x000077c7, 0x000077cd, 0x000077d7,
        0x000077da, 0x000077dc, 0x000077e3, 0x000077ee, 0x000077fc, 0x0000780c, 0x00007812, 0x00007926,
        0x00007820, 0x0000792a, 0x00007845, 0x0000788e, 0x00007874, 0x00007886, 0x0000787c, 0x0000789a,
        0x0000788c, 0x000078a3, 0x000078b5, 0x000078aa, 0x000078af, 0x000078d1, 0x000078c6, 0x000078cb,
        0x000078d4, 0x000078be, 0x000078bc, 0x000078c5, 0x000078ca, 0x000078ec,
    ],
    [
        0x000078e7, 0x000078da, 0x000078fd, 0x000078f4, 0x00007907, 0x00007912, 0x00007911, 0x00007919,
        0x0000792c, 0x0000792b, 0x00007940, 0x00007960, 0x00007957, 0x0000795f, 0x0000795a, 0x00007955,
        0x00007953, 0x0000797a, 0x0000797f, 0x0000798a, 0x0000799d, 0x000079a7, 0x00009f4b, 0x000079aa,
        0x000079ae, 0x000079b3, 0x000079b9, 0x000079ba, 0x000079c9, 0x000079d5, 0x000079e7, 0x000079ec,
        0x000079e1, 0x000079e3, 0x00007a08, 0x00007a0d, 0x00007a18, 0x00007a19, 0x00007a20, 0x00007a1f,
        0x00007980, 0x00007a31, 0x00007a3b, 0x00007a3e, 0x00007a37, 0x00007a43, 0x00007a57, 0x00007a49,
        0x00007a61, 0x00007a62, 0x00007a69, 0x00009f9d, 0x00007a70, 0x00007a79, 0x00007a7d, 0x00007a88,
        0x00007a97, 0x00007a95, 0x00007a98, 0x00007a96, 0x00007aa9, 0x00007ac8, 0x00007ab0, 0x00007ab6,
        0x00007ac5, 0x00007ac4, 0x00007abf, 0x00009083, 0x00007ac7, 0x00007aca, 0x00007acd, 0x00007acf,
        0x00007ad5, 0x00007ad3, 0x00007ad9, 0x00007ada, 0x00007add, 0x00007ae1, 0x00007ae2, 0x00007ae6,
        0x00007aed, 0x00007af0, 0x00007b02, 0x00007b0f, 0x00007b0a, 0x00007b06, 0x00007b33, 0x00007b18,
        0x00007b19, 0x00007b1e, 0x00007b35, 0x00007b28, 0x00007b36, 0x00007b50,
    ],
    [
        0x00007b7a, 0x00007b04, 0x00007b4d, 0x00007b0b, 0x00007b4c, 0x00007b45, 0x00007b75, 0x00007b65,
        0x00007b74, 0x00007b67, 0x00007b70, 0x00007b71, 0x00007b6c, 0x00007b6e, 0x00007b9d, 0x00007b98,
        0x00007b9f, 0x00007b8d, 0x00007b9c, 0x00007b9a, 0x00007b8b, 0x00007b92, 0x00007b8f, 0x00007b5d,
        0x00007b99, 0x00007bcb, 0x00007bc1, 0x00007bcc, 0x00007bcf, 0x00007bb4, 0x00007bc6, 0x00007bdd,
        0x00007be9, 0x00007c11, 0x00007c14, 0x00007be6, 0x00007be5, 0x00007c60, 0x00007c00, 0x00007c07,
        0x00007c13, 0x00007bf3, 0x00007bf7, 0x00007c17, 0x00007c0d, 0x00007bf6, 0x00007c23, 0x00007c27,
        0x00007c2a, 0x00007c1f, 0x00007c37, 0x00007c2b, 0x00007c3d, 0x00007c4c, 0x00007c43, 0x00007c54,
        0x00007c4f, 0x00007c40, 0x00007c50, 0x00007c58, 0x00007c5f, 0x00007c64, 0x00007c56, 0x00007c65,
        0x00007c6c, 0x00007c75, 0x00007c83, 0x00007c90, 0x00007ca4, 0x00007cad, 0x00007ca2, 0x00007cab,
        0x00007ca1, 0x00007ca8, 0x00007cb3, 0x00007cb2, 0x00007cb1, 0x00007cae, 0x00007cb9, 0x00007cbd,
        0x00007cc0, 0x00007cc5, 0x00007cc2, 0x00007cd8, 0x00007cd2, 0x00007cdc, 0x00007ce2, 0x00009b3b,
        0x00007cef, 0x00007cf2, 0x00007cf4, 0x00007cf6, 0x00007cfa, 0x00007d06,
    ],
    [
        0x00007d02, 0x00007d1c, 0x00007d15, 0x00007d0a, 0x00007d45, 0x00007d4b, 0x00007d2e, 0x00007d32,
        0x00007d3f, 0x00007d35, 0x00007d46, 0x00007d73, 0x00007d56, 0x00007d4e, 0x00007d72, 0x00007d68,
        0x00007d6e, 0x00007d4f, 0x00007d63, 0x00007d93, 0x00007d89, 0x00007d5b, 0x00007d8f, 0x00007d7d,
        0x00007d9b, 0x00007dba, 0x00007dae, 0x00007da3, 0x00007db5, 0x00007dc7, 0x00007dbd, 0x00007dab,
        0x00007e3d, 0x00007da2, 0x00007daf, 0x00007ddc, 0x00007db8, 0x00007d9f, 0x00007db0, 0x00007dd8,
        0x00007ddd, 0x00007de4, 0x00007dde, 0x00007dfb, 0x00007df2, 0x00007de1, 0x00007e05, 0x00007e0a,
        0x00007e23, 0x00007e21, 0x00007e12, 0x00007e31, 0x00007e1f, 0x00007e09, 0x00007e0b, 0x00007e22,
        0x00007e46, 0x00007e66, 0x00007e3b, 0x00007e35, 0x00007e39, 0x00007e43, 0x00007e37, 0x00007e32,
        0x00007e3a, 0x00007e67, 0x00007e5d, 0x00007e56, 0x00007e5e, 0x00007e59, 0x00007e5a, 0x00007e79,
        0x00007e6a, 0x00007e69, 0x00007e7c, 0x00007e7b, 0x00007e83, 0x00007dd5, 0x00007e7d, 0x00008fae,
        0x00007e7f, 0x00007e88, 0x00007e89, 0x00007e8c, 0x00007e92, 0x00007e90, 0x00007e93, 0x00007e94,
        0x00007e96, 0x00007e8e, 0x00007e9b, 0x00007e9c, 0x00007f38, 0x00007f3a,
    ],
    [
        0x00007f45, 0x00007f4c, 0x00007f4d, 0x00007f4e, 0x00007f50, 0x00007f51, 0x00007f55, 0x00007f54,
        0x00007f58, 0x00007f5f, 0x00007f60, 0x00007f68, 0x00007f69, 0x00007f67, 0x00007f78, 0x00007f82,
        0x00007f86, 0x00007f83, 0x00007f88, 0x00007f87, 0x00007f8c, 0x00007f94, 0x00007f9e, 0x00007f9d,
        0x00007f9a, 0x00007fa3, 0x00007faf, 0x00007fb2, 0x00007fb9, 0x00007fae, 0x00007fb6, 0x00007fb8,
        0x00008b71, 0x00007fc5, 0x00007fc6, 0x00007fca, 0x00007fd5, 0x00007fd4, 0x00007fe1, 0x00007fe6,
        0x00007fe9, 0x00007ff3, 0x00007ff9, 0x000098dc, 0x00008006, 0x00008004, 0x0000800b, 0x00008012,
        0x00008018, 0x00008019, 0x0000801c, 0x00008021, 0x00008028, 0x0000803f, 0x0000803b, 0x0000804a,
        0x00008046, 0x00008052, 0x00008058, 0x0000805a, 0x0000805f, 0x00008062, 0x00008068, 0x00008073,
        0x00008072, 0x00008070, 0x00008076, 0x00008079, 0x0000807d, 0x0000807f, 0x00008084, 0x00008086,
        0x00008085, 0x0000809b, 0x00008093, 0x0000809a, 0x000080ad, 0x00005190, 0x000080ac, 0x000080db,
        0x000080e5, 0x000080d9, 0x000080dd, 0x000080c4, 0x000080da, 0x000080d6, 0x00008109, 0x000080ef,
        0x000080f1, 0x0000811b, 0x00008129, 0x00008123, 0x0000812f, 0x0000814b,
    ],
    [
        0x0000968b, 0x00008146, 0x0000813e, 0x00008153, 0x00008151, 0x000080fc, 0x00008171, 0x0000816e,
        0x00008165, 0x00008166, 0x00008174, 0x00008183, 0x00008188, 0x0000818a, 0x00008180, 0x00008182,
        0x000081a0, 0x00008195, 0x000081a4, 0x000081a3, 0x0000815f, 0x00008193, 0x000081a9, 0x000081b0,
        0x000081b5, 0x000081be, 0x000081b8, 0x000081bd, 0x000081c0, 0x000081c2, 0x000081ba, 0x000081c9,
        0x000081cd, 0x000081d1, 0x000081d9, 0x000081d8, 0x000081c8, 0x000081da, 0x000081df, 0x000081e0,
        0x000081e7, 0x000081fa, 0x000081fb, 0x000081fe, 0x00008201, 0x00008202, 0x00008205, 0x00008207,
        0x0000820a, 0x0000820d, 0x00008210, 0x00008216, 0x00008229, 0x0000822b, 0x00008238, 0x00008233,
        0x00008240, 0x00008259, 0x00008258, 0x0000825d, 0x0000825a, 0x0000825f, 0x00008264, 0x00008262,
        0x00008268, 0x0000826a, 0x0000826b, 0x0000822e, 0x00008271, 0x00008277, 0x00008278, 0x0000827e,
        0x0000828d, 0x00008292, 0x000082ab, 0x0000829f, 0x000082bb, 0x000082ac, 0x000082e1, 0x000082e3,
        0x000082df, 0x000082d2, 0x000082f4, 0x000082f3, 0x000082fa, 0x00008393, 0x00008303, 0x000082fb,
        0x000082f9, 0x000082de, 0x00008306, 0x000082dc, 0x00008309, 0x000082d9,
    ],
    [
        0x00008335, 0x00008334, 0x00008316, 0x00008332, 0x00008331, 0x00008340, 0x00008339, 0x00008350,
        0x00008345, 0x0000832f, 0x0000832b, 0x00008317, 0x00008318, 0x00008385, 0x0000839a, 0x000083aa,
        0x0000839f, 0x000083a2, 0x00008396, 0x00008323, 0x0000838e, 0x00008387, 0x0000838a, 0x0000837c,
        0x000083b5, 0x00008373, 0x00008375, 0x000083a0, 0x00008389, 0x000083a8, 0x000083f4, 0x00008413,
        0x000083eb, 0x000083ce, 0x000083fd, 0x00008403, 0x000083d8, 0x0000840b, 0x000083c1, 0x000083f7,
        0x00008407, 0x000083e0, 0x000083f2, 0x0000840d, 0x00008422, 0x00008420, 0x000083bd, 0x00008438,
        0x00008506, 0x000083fb, 0x0000846d, 0x0000842a, 0x0000843c, 0x0000855a, 0x00008484, 0x00008477,
        0x0000846b, 0x000084ad, 0x0000846e, 0x00008482, 0x00008469, 0x00008446, 0x0000842c, 0x0000846f,
        0x00008479, 0x00008435, 0x000084ca, 0x00008462, 0x000084b9, 0x000084bf, 0x0000849f, 0x000084d9,
        0x000084cd, 0x000084bb, 0x000084da, 0x000084d0, 0x000084c1, 0x000084c6, 0x000084d6, 0x000084a1,
        0x00008521, 0x000084ff, 0x000084f4, 0x00008517, 0x00008518, 0x0000852c, 0x0000851f, 0x00008515,
        0x00008514, 0x000084fc, 0x00008540, 0x00008563, 0x00008558, 0x00008548,
    ],
    [
        0x00008541, 0x00008602, 0x0000854b, 0x00008555, 0x00008580, 0x000085a4, 0x00008588, 0x00008591,
        0x0000858a, 0x000085a8, 0x0000856d, 0x00008594, 0x0000859b, 0x000085ea, 0x00008587, 0x0000859c,
        0x00008577, 0x0000857e, 0x00008590, 0x000085c9, 0x000085ba, 0x000085cf, 0x000085b9, 0x000085d0,
        0x000085d5, 0x000085dd, 0x000085e5, 0x000085dc, 0x000085f9, 0x0000860a, 0x00008613, 0x0000860b,
        0x000085fe, 0x000085fa, 0x00008606, 0x00008622, 0x0000861a, 0x00008630, 0x0000863f, 0x0000864d,
        0x00004e55, 0x00008654, 0x0000865f, 0x00008667, 0x00008671, 0x00008693, 0x000086a3, 0x000086a9,
        0x000086aa, 0x0000868b, 0x0000868c, 0x000086b6, 0x000086af, 0x000086c4, 0x000086c6, 0x000086b0,
        0x000086c9, 0x00008823, 0x000086ab, 0x000086d4, 0x000086de, 0x000086e9, 0x000086ec, 0x000086df,
        0x000086db, 0x000086ef, 0x00008712, 0x00008706, 0x00008708, 0x00008700, 0x00008703, 0x000086fb,
        0x00008711, 0x00008709, 0x0000870d, 0x000086f9, 0x0000870a, 0x00008734, 0x0000873f, 0x00008737,
        0x0000873b, 0x00008725, 0x00008729, 0x0000871a, 0x00008760, 0x0000875f, 0x00008778, 0x0000874c,
        0x0000874e, 0x00008774, 0x00008757, 0x00008768, 0x0000876e, 0x00008759,
    ],
    [
        0x00008753, 0x00008763, 0x0000876a, 0x00008805, 0x000087a2, 0x0000879f, 0x00008782, 0x000087af,
        0x000087cb, 0x000087bd, 0x000087c0, 0x000087d0, 0x000096d6, 0x000087ab, 0x000087c4, 0x000087b3,
        0x000087c7, 0x000087c6, 0x000087bb, 0x000087ef, 0x000087f2, 0x000087e0, 0x0000880f, 0x0000880d,
        0x000087fe, 0x000087f6, 0x000087f7, 0x0000880e, 0x000087d2, 0x00008811, 0x00008816, 0x00008815,
        0x00008822, 0x00008821, 0x00008831, 0x00008836, 0x00008839, 0x00008827, 0x0000883b, 0x00008844,
        0x00008842, 0x00008852, 0x00008859, 0x0000885e, 0x00008862, 0x0000886b, 0x00008881, 0x0000887e,
        0x0000889e, 0x00008875, 0x0000887d, 0x000088b5, 0x00008872, 0x00008882, 0x00008897, 0x00008892,
        0x000088ae, 0x00008899, 0x000088a2, 0x0000888d, 0x000088a4, 0x000088b0, 0x000088bf, 0x000088b1,
        0x000088c3, 0x000088c4, 0x000088d4, 0x000088d8, 0x000088d9, 0x000088dd, 0x000088f9, 0x00008902,
        0x000088fc, 0x000088f4, 0x000088e8, 0x000088f2, 0x00008904, 0x0000890c, 0x0000890a, 0x00008913,
        0x00008943, 0x0000891e, 0x00008925, 0x0000892a, 0x0000892b, 0x00008941, 0x00008944, 0x0000893b,
        0x00008936, 0x00008938, 0x0000894c, 0x0000891d, 0x00008960, 0x0000895e,
    ],
    [
        0x00008966, 0x00008964, 0x0000896d, 0x0000896a, 0x0000896f, 0x00008974, 0x00008977, 0x0000897e,
        0x00008983, 0x00008988, 0x0000898a, 0x00008993, 0x00008998, 0x000089a1, 0x000089a9, 0x000089a6,
        0x000089ac, 0x000089af, 0x000089b2, 0x000089ba, 0x000089bd, 0x000089bf, 0x000089c0, 0x000089da,
        0x000089dc, 0x000089dd, 0x000089e7, 0x000089f4, 0x000089f8, 0x00008a03, 0x00008a16, 0x00008a10,
        0x00008a0c, 0x00008a1b, 0x00008a1d, 0x00008a25, 0x00008a36, 0x00008a41, 0x00008a5b, 0x00008a52,
        0x00008a46, 0x00008a48, 0x00008a7c, 0x00008a6d, 0x00008a6c, 0x00008a62, 0x00008a85, 0x00008a82,
        0x00008a84, 0x00008aa8, 0x00008aa1, 0x00008a91, 0x00008aa5, 0x00008aa6, 0x00008a9a, 0x00008aa3,
        0x00008ac4, 0x00008acd, 0x00008ac2, 0x00008ada, 0x00008aeb, 0x00008af3, 0x00008ae7, 0x00008ae4,
        0x00008af1, 0x00008b14, 0x00008ae0, 0x00008ae2, 0x00008af7, 0x00008ade, 0x00008adb, 0x00008b0c,
        0x00008b07, 0x00008b1a, 0x00008ae1, 0x00008b16, 0x00008b10, 0x00008b17, 0x00008b20, 0x00008b33,
        0x000097ab, 0x00008b26, 0x00008b2b, 0x00008b3e, 0x00008b28, 0x00008b41, 0x00008b4c, 0x00008b4f,
        0x00008b4e, 0x00008b49, 0x00008b56, 0x00008b5b, 0x00008b5a, 0x00008b6b,
    ],
    [
        0x00008b5f, 0x00008b6c, 0x00008b6f, 0x00008b74, 0x00008b7d, 0x00008b80, 0x00008b8c, 0x00008b8e,
        0x00008b92, 0x00008b93, 0x00008b96, 0x00008b99, 0x00008b9a, 0x00008c3a, 0x00008c41, 0x00008c3f,
        0x00008c48, 0x00008c4c, 0x00008c4e, 0x00008c50, 0x00008c55, 0x00008c62, 0x00008c6c, 0x00008c78,
        0x00008c7a, 0x00008c82, 0x00008c89, 0x00008c85, 0x00008c8a, 0x00008c8d, 0x00008c8e, 0x00008c94,
        0x00008c7c, 0x00008c98, 0x0000621d, 0x00008cad, 0x00008caa, 0x00008cbd, 0x00008cb2, 0x00008cb3,
        0x00008cae, 0x00008cb6, 0x00008cc8, 0x00008cc1, 0x00008ce4, 0x00008ce3, 0x00008cda, 0x00008cfd,
        0x00008cfa, 0x00008cfb, 0x00008d04, 0x00008d05, 0x00008d0a, 0x00008d07, 0x00008d0f, 0x00008d0d,
        0x00008d10, 0x00009f4e, 0x00008d13, 0x00008ccd, 0x00008d14, 0x00008d16, 0x00008d67, 0x00008d6d,
        0x00008d71, 0x00008d73, 0x00008d81, 0x00008d99, 0x00008dc2, 0x00008dbe, 0x00008dba, 0x00008dcf,
        0x00008dda, 0x00008dd6, 0x00008dcc, 0x00008ddb, 0x00008dcb, 0x00008dea, 0x00008deb, 0x00008ddf,
        0x00008de3, 0x00008dfc, 0x00008e08, 0x00008e09, 0x00008dff, 0x00008e1d, 0x00008e1e, 0x00008e10,
        0x00008e1f, 0x00008e42, 0x00008e35, 0x00008e30, 0x00008e34, 0x00008e4a,
    ],
    [
        0x00008e47, 0x00008e49, 0x00008e4c, 0x00008e50, 0x00008e48, 0x00008e59, 0x00008e64, 0x00008e60,
        0x00008e2a, 0x00008e63, 0x00008e55, 0x00008e76, 0x00008e72, 0x00008e7c, 0x00008e81, 0x00008e87,
        0x00008e85, 0x00008e84, 0x00008e8b, 0x00008e8a, 0x00008e93, 0x00008e91, 0x00008e94, 0x00008e99,
        0x00008eaa, 0x00008ea1, 0x00008eac, 0x00008eb0, 0x00008ec6, 0x00008eb1, 0x00008ebe, 0x00008ec5,
        0x00008ec8, 0x00008ecb, 0x00008edb, 0x00008ee3, 0x00008efc, 0x00008efb, 0x00008eeb, 0x00008efe,
        0x00008f0a, 0x00008f05, 0x00008f15, 0x00008f12, 0x00008f19, 0x00008f13, 0x00008f1c, 0x00008f1f,
        0x00008f1b, 0x00008f0c, 0x00008f26, 0x00008f33, 0x00008f3b, 0x00008f39, 0x00008f45, 0x00008f42,
        0x00008f3e, 0x00008f4c, 0x00008f49, 0x00008f46, 0x00008f4e, 0x00008f57, 0x00008f5c, 0x00008f62,
        0x00008f63, 0x00008f64, 0x00008f9c, 0x00008f9f, 0x00008fa3, 0x00008fad, 0x00008faf, 0x00008fb7,
        0x00008fda, 0x00008fe5, 0x00008fe2, 0x00008fea, 0x00008fef, 0x00009087, 0x00008ff4, 0x00009005,
        0x00008ff9, 0x00008ffa, 0x00009011, 0x00009015, 0x00009021, 0x0000900d, 0x0000901e, 0x00009016,
        0x0000900b, 0x00009027, 0x00009036, 0x00009035, 0x00009039, 0x00008ff8,
    ],
    [
        0x0000904f, 0x00009050, 0x00009051, 0x00009052, 0x0000900e, 0x00009049, 0x0000903e, 0x00009056,
        0x00009058, 0x0000905e, 0x00009068, 0x0000906f, 0x00009076, 0x000096a8, 0x00009072, 0x00009082,
        0x0000907d, 0x00009081, 0x00009080, 0x0000908a, 0x00009089, 0x0000908f, 0x000090a8, 0x000090af,
        0x000090b1, 0x000090b5, 0x000090e2, 0x000090e4, 0x00006248, 0x000090db, 0x00009102, 0x00009112,
        0x00009119, 0x00009132, 0x00009130, 0x0000914a, 0x00009156, 0x00009158, 0x00009163, 0x00009165,
        0x00009169, 0x00009173, 0x00009172, 0x0000918b, 0x00009189, 0x00009182, 0x000091a2, 0x000091ab,
        0x000091af, 0x000091aa, 0x000091b5, 0x000091b4, 0x000091ba, 0x000091c0, 0x000091c1, 0x000091c9,
        0x000091cb, 0x000091d0, 0x000091d6, 0x000091df, 0x000091e1, 0x000091db, 0x000091fc, 0x000091f5,
        0x000091f6, 0x0000921e, 0x000091ff, 0x00009214, 0x0000922c, 0x00009215, 0x00009211, 0x0000925e,
        0x00009257, 0x00009245, 0x00009249, 0x00009264, 0x00009248, 0x00009295, 0x0000923f, 0x0000924b,
        0x00009250, 0x0000929c, 0x00009296, 0x00009293, 0x0000929b, 0x0000925a, 0x000092cf, 0x000092b9,
        0x000092b7, 0x000092e9, 0x0000930f, 0x000092fa, 0x00009344, 0x0000932e,
    ],
    [
        0x00009319, 0x00009322, 0x0000931a, 0x00009323, 0x0000933a, 0x00009335, 0x0000933b, 0x0000935c,
        0x00009360, 0x0000937c, 0x0000936e, 0x00009356, 0x000093b0, 0x000093ac, 0x000093ad, 0x00009394,
        0x000093b9, 0x000093d6, 0x000093d7, 0x000093e8, 0x000093e5, 0x000093d8, 0x000093c3, 0x000093dd,
        0x000093d0, 0x000093c8, 0x000093e4, 0x0000941a, 0x00009414, 0x00009413, 0x00009403, 0x00009407,
        0x00009410, 0x00009436, 0x0000942b, 0x00009435, 0x00009421, 0x0000943a, 0x00009441, 0x00009452,
        0x00009444, 0x0000945b, 0x00009460, 0x00009462, 0x0000945e, 0x0000946a, 0x00009229, 0x00009470,
        0x00009475, 0x00009477, 0x0000947d, 0x0000945a, 0x0000947c, 0x0000947e, 0x00009481, 0x0000947f,
        0x00009582, 0x00009587, 0x0000958a, 0x00009594, 0x00009596, 0x00009598, 0x00009599, 0x000095a0,
        0x000095a8, 0x000095a7, 0x000095ad, 0x000095bc, 0x000095bb, 0x000095b9, 0x000095be, 0x000095ca,
        0x00006ff6, 0x000095c3, 0x000095cd, 0x000095cc, 0x000095d5, 0x000095d4, 0x000095d6, 0x000095dc,
        0x000095e1, 0x000095e5, 0x000095e2, 0x00009621, 0x00009628, 0x0000962e, 0x0000962f, 0x00009642,
        0x0000964c, 0x0000964f, 0x0000964b, 0x00009677, 0x0000965c, 0x0000965e,
    ],
    [
        0x0000965d, 0x0000965f, 0x00009666, 0x00009672, 0x0000966c, 0x0000968d, 0x00009698, 0x00009695,
        0x00009697, 0x000096aa, 0x000096a7, 0x000096b1, 0x000096b2, 0x000096b0, 0x000096b4, 0x000096b6,
        0x000096b8, 0x000096b9, 0x000096ce, 0x000096cb, 0x000096c9, 0x000096cd, 0x0000894d, 0x000096dc,
        0x0000970d, 0x000096d5, 0x000096f9, 0x00009704, 0x00009706, 0x00009708, 0x00009713, 0x0000970e,
        0x00009711, 0x0000970f, 0x00009716, 0x00009719, 0x00009724, 0x0000972a, 0x00009730, 0x00009739,
        0x0000973d, 0x0000973e, 0x00009744, 0x00009746, 0x00009748, 0x00009742, 0x00009749, 0x0000975c,
        0x00009760, 0x00009764, 0x00009766, 0x00009768, 0x000052d2, 0x0000976b, 0x00009771, 0x00009779,
        0x00009785, 0x0000977c, 0x00009781, 0x0000977a, 0x00009786, 0x0000978b, 0x0000978f, 0x00009790,
        0x0000979c, 0x000097a8, 0x000097a6, 0x000097a3, 0x000097b3, 0x000097b4, 0x000097c3, 0x000097c6,
        0x000097c8, 0x000097cb, 0x000097dc, 0x000097ed, 0x00009f4f, 0x000097f2, 0x00007adf, 0x000097f6,
        0x000097f5, 0x0000980f, 0x0000980c, 0x00009838, 0x00009824, 0x00009821, 0x00009837, 0x0000983d,
        0x00009846, 0x0000984f, 0x0000984b, 0x0000986b, 0x0000986f, 0x00009870,
    ],
    [
        0x00009871, 0x00009874, 0x00009873, 0x000098aa, 0x000098af, 0x000098b1, 0x000098b6, 0x000098c4,
        0x000098c3, 0x000098c6, 0x000098e9, 0x000098eb, 0x00009903, 0x00009909, 0x00009912, 0x00009914,
        0x00009918, 0x00009921, 0x0000991d, 0x0000991e, 0x00009924, 0x00009920, 0x0000992c, 0x0000992e,
        0x0000993d, 0x0000993e, 0x00009942, 0x00009949, 0x00009945, 0x00009950, 0x0000994b, 0x00009951,
        0x00009952, 0x0000994c, 0x00009955, 0x00009997, 0x00009998, 0x000099a5, 0x000099ad, 0x000099ae,
        0x000099bc, 0x000099df, 0x000099db, 0x000099dd, 0x000099d8, 0x000099d1, 0x000099ed, 0x000099ee,
        0x000099f1, 0x000099f2, 0x000099fb, 0x000099f8, 0x00009a01, 0x00009a0f, 0x00009a05, 0x000099e2,
        0x00009a19, 0x00009a2b, 0x00009a37, 0x00009a45, 0x00009a42, 0x00009a40, 0x00009a43, 0x00009a3e,
        0x00009a55, 0x00009a4d, 0x00009a5b, 0x00009a57, 0x00009a5f, 0x00009a62, 0x00009a65, 0x00009a64,
        0x00009a69, 0x00009a6b, 0x00009a6a, 0x00009aad, 0x00009ab0, 0x00009abc, 0x00009ac0, 0x00009acf,
        0x00009ad1, 0x00009ad3, 0x00009ad4, 0x00009ade, 0x00009adf, 0x00009ae2, 0x00009ae3, 0x00009ae6,
        0x00009aef, 0x00009aeb, 0x00009aee, 0x00009af4, 0x00009af1, 0x00009af7,
    ],
    [
        0x00009afb, 0x00009b06, 0x00009b18, 0x00009b1a, 0x00009b1f, 0x00009b22, 0x00009b23, 0x00009b25,
        0x00009b27, 0x00009b28, 0x00009b29, 0x00009b2a, 0x00009b2e, 0x00009b2f, 0x00009b32, 0x00009b44,
        0x00009b43, 0x00009b4f, 0x00009b4d, 0x00009b4e, 0x00009b51, 0x00009b58, 0x00009b74, 0x00009b93,
        0x00009b83, 0x00009b91, 0x00009b96, 0x00009b97, 0x00009b9f, 0x00009ba0, 0x00009ba8, 0x00009bb4,
        0x00009bc0, 0x00009bca, 0x00009bb9, 0x00009bc6, 0x00009bcf, 0x00009bd1, 0x00009bd2, 0x00009be3,
        0x00009be2, 0x00009be4, 0x00009bd4, 0x00009be1, 0x00009c3a, 0x00009bf2, 0x00009bf1, 0x00009bf0,
        0x00009c15, 0x00009c14, 0x00009c09, 0x00009c13, 0x00009c0c, 0x00009c06, 0x00009c08, 0x00009c12,
        0x00009c0a, 0x00009c04, 0x00009c2e, 0x00009c1b, 0x00009c25, 0x00009c24, 0x00009c21, 0x00009c30,
        0x00009c47, 0x00009c32, 0x00009c46, 0x00009c3e, 0x00009c5a, 0x00009c60, 0x00009c67, 0x00009c76,
        0x00009c78, 0x00009ce7, 0x00009cec, 0x00009cf0, 0x00009d09, 0x00009d08, 0x00009ceb, 0x00009d03,
        0x00009d06, 0x00009d2a, 0x00009d26, 0x00009daf, 0x00009d23, 0x00009d1f, 0x00009d44, 0x00009d15,
        0x00009d12, 0x00009d41, 0x00009d3f, 0x00009d3e, 0x00009d46, 0x00009d48,
    ],
    [
        0x00009d5d, 0x00009d5e, 0x00009d64, 0x00009d51, 0x00009d50, 0x00009d59, 0x00009d72, 0x00009d89,
        0x00009d87, 0x00009dab, 0x00009d6f, 0x00009d7a, 0x00009d9a, 0x00009da4, 0x00009da9, 0x00009db2,
        0x00009dc4, 0x00009dc1, 0x00009dbb, 0x00009db8, 0x00009dba, 0x00009dc6, 0x00009dcf, 0x00009dc2,
        0x00009dd9, 0x00009dd3, 0x00009df8, 0x00009de6, 0x00009ded, 0x00009def, 0x00009dfd, 0x00009e1a,
        0x00009e1b, 0x00009e1e, 0x00009e75, 0x00009e79, 0x00009e7d, 0x00009e81, 0x00009e88, 0x00009e8b,
        0x00009e8c, 0x00009e92, 0x00009e95, 0x00009e91, 0x00009e9d, 0x00009ea5, 0x00009ea9, 0x00009eb8,
        0x00009eaa, 0x00009ead, 0x00009761, 0x00009ecc, 0x00009ece, 0x00009ecf, 0x00009ed0, 0x00009ed4,
        0x00009edc, 0x00009ede, 0x00009edd, 0x00009ee0, 0x00009ee5, 0x00009ee8, 0x00009eef, 0x00009ef4,
        0x00009ef6, 0x00009ef7, 0x00009ef9, 0x00009efb, 0x00009efc, 0x00009efd, 0x00009f07, 0x00009f08,
        0x000076b7, 0x00009f15, 0x00009f21, 0x00009f2c, 0x00009f3e, 0x00009f4a, 0x00009f52, 0x00009f54,
        0x00009f63, 0x00009f5f, 0x00009f60, 0x00009f61, 0x00009f66, 0x00009f67, 0x00009f6c, 0x00009f6a,
        0x00009f77, 0x00009f72, 0x00009f76, 0x00009f95, 0x00009f9c, 0x00009fa0,
    ],
    [
        0x0000582f, 0x000069c7, 0x00009059, 0x00007464, 0x000051dc, 0x00007199, 0x00005653, 0x00005de2,
        0x00005e14, 0x00005e18, 0x00005e58, 0x00005e5e, 0x00005ebe, 0x0000f928, 0x00005ecb, 0x00005ef9,
        0x00005f00, 0x00005f02, 0x00005f07, 0x00005f1d, 0x00005f23, 0x00005f34, 0x00005f36, 0x00005f3d,
        0x00005f40, 0x00005f45, 0x00005f54, 0x00005f58, 0x00005f64, 0x00005f67, 0x00005f7d, 0x00005f89,
        0x00005f9c, 0x00005fa7, 0x00005faf, 0x00005fb5, 0x00005fb7, 0x00005fc9, 0x00005fde, 0x00005fe1,
        0x00005fe9, 0x0000600d, 0x00006014, 0x00006018, 0x00006033, 0x00006035, 0x00006047, 0x0000fa3d,
        0x0000609d, 0x0000609e, 0x000060cb, 0x000060d4, 0x000060d5, 0x000060dd, 0x000060f8, 0x0000611c,
        0x0000612b, 0x00006130, 0x00006137, 0x0000fa3e, 0x0000618d, 0x0000fa3f, 0x000061bc, 0x000061b9,
        0x0000fa40, 0x00006222, 0x0000623e, 0x00006243, 0x00006256, 0x0000625a, 0x0000626f, 0x00006285,
        0x000062c4, 0x000062d6, 0x000062fc, 0x0000630a, 0x00006318, 0x00006339, 0x00006343, 0x00006365,
        0x0000637c, 0x000063e5, 0x000063ed, 0x000063f5, 0x00006410, 0x00006414, 0x00006422, 0x00006479,
        0x00006451, 0x00006460, 0x0000646d, 0x000064ce, 0x000064be, 0x000064bf,
    ],
    [
        0x000064c4, 0x000064ca, 0x000064d0, 0x000064f7, 0x000064fb, 0x00006522, 0x00006529, 0x0000fa41,
        0x00006567, 0x0000659d, 0x0000fa42, 0x00006600, 0x00006609, 0x00006615, 0x0000661e, 0x0000663a,
        0x00006622, 0x00006624, 0x0000662b, 0x00006630, 0x00006631, 0x00006633, 0x000066fb, 0x00006648,
        0x0000664c, 0x000231c4, 0x00006659, 0x0000665a, 0x00006661, 0x00006665, 0x00006673, 0x00006677,
        0x00006678, 0x0000668d, 0x0000fa43, 0x000066a0, 0x000066b2, 0x000066bb, 0x000066c6, 0x000066c8,
        0x00003b22, 0x000066db, 0x000066e8, 0x000066fa, 0x00006713, 0x0000f929, 0x00006733, 0x00006766,
        0x00006747, 0x00006748, 0x0000677b, 0x00006781, 0x00006793, 0x00006798, 0x0000679b, 0x000067bb,
        0x000067f9, 0x000067c0, 0x000067d7, 0x000067fc, 0x00006801, 0x00006852, 0x0000681d, 0x0000682c,
        0x00006831, 0x0000685b, 0x00006872, 0x00006875, 0x0000fa44, 0x000068a3, 0x000068a5, 0x000068b2,
        0x000068c8, 0x000068d0, 0x000068e8, 0x000068ed, 0x000068f0, 0x000068f1, 0x000068fc, 0x0000690a,
        0x00006949, 0x000235c4, 0x00006935, 0x00006942, 0x00006957, 0x00006963, 0x00006964, 0x00006968,
        0x00006980, 0x0000fa14, 0x000069a5, 0x000069ad, 0x000069cf, 0x00003bb6,
    ],
    [
        0x00003bc3, 0x000069e2, 0x000069e9, 0x000069ea, 0x000069f5, 0x000069f6, 0x00006a0f, 0x00006a15,
        0x0002373f, 0x00006a3b, 0x00006a3e, 0x00006a45, 0x00006a50, 0x00006a56, 0x00006a5b, 0x00006a6b,
        0x00006a73, 0x00023763, 0x00006a89, 0x00006a94, 0x00006a9d, 0x00006a9e, 0x00006aa5, 0x00006ae4,
        0x00006ae7, 0x00003c0f, 0x0000f91d, 0x00006b1b, 0x00006b1e, 0x00006b2c, 0x00006b35, 0x00006b46,
        0x00006b56, 0x00006b60, 0x00006b65, 0x00006b67, 0x00006b77, 0x00006b82, 0x00006ba9, 0x00006bad,
        0x0000f970, 0x00006bcf, 0x00006bd6, 0x00006bd7, 0x00006bff, 0x00006c05, 0x00006c10, 0x00006c33,
        0x00006c59, 0x00006c5c, 0x00006caa, 0x00006c74, 0x00006c76, 0x00006c85, 0x00006c86, 0x00006c98,
        0x00006c9c, 0x00006cfb, 0x00006cc6, 0x00006cd4, 0x00006ce0, 0x00006ceb, 0x00006cee, 0x00023cfe,
        0x00006d04, 0x00006d0e, 0x00006d2e, 0x00006d31, 0x00006d39, 0x00006d3f, 0x00006d58, 0x00006d65,
        0x0000fa45, 0x00006d82, 0x00006d87, 0x00006d89, 0x00006d94, 0x00006daa, 0x00006dac, 0x00006dbf,
        0x00006dc4, 0x00006dd6, 0x00006dda, 0x00006ddb, 0x00006ddd, 0x00006dfc, 0x0000fa46, 0x00006e34,
        0x00006e44, 0x00006e5c, 0x00006e5e, 0x00006eab, 0x00006eb1, 0x00006ec1,
    ],
    [
        0x00006ec7, 0x00006ece, 0x00006f10, 0x00006f1a, 0x0000fa47, 0x00006f2a, 0x00006f2f, 0x00006f33,
        0x00006f51, 0x00006f59, 0x00006f5e, 0x00006f61, 0x00006f62, 0x00006f7e, 0x00006f88, 0x00006f8c,
        0x00006f8d, 0x00006f94, 0x00006fa0, 0x00006fa7, 0x00006fb6, 0x00006fbc, 0x00006fc7, 0x00006fca,
        0x00006ff9, 0x00006ff0, 0x00006ff5, 0x00007005, 0x00007006, 0x00007028, 0x0000704a, 0x0000705d,
        0x0000705e, 0x0000704e, 0x00007064, 0x00007075, 0x00007085, 0x000070a4, 0x000070ab, 0x000070b7,
        0x000070d4, 0x000070d8, 0x000070e4, 0x0000710f, 0x0000712b, 0x0000711e, 0x00007120, 0x0000712e,
        0x00007130, 0x00007146, 0x00007147, 0x00007151, 0x0000fa48, 0x00007152, 0x0000715c, 0x00007160,
        0x00007168, 0x0000fa15, 0x00007185, 0x00007187, 0x00007192, 0x000071c1, 0x000071ba, 0x000071c4,
        0x000071fe, 0x00007200, 0x00007215, 0x00007255, 0x00007256, 0x00003e3f, 0x0000728d, 0x0000729b,
        0x000072be, 0x000072c0, 0x000072fb, 0x000247f1, 0x00007327, 0x00007328, 0x0000fa16, 0x00007350,
        0x00007366, 0x0000737c, 0x00007395, 0x0000739f, 0x000073a0, 0x000073a2, 0x000073a6, 0x000073ab,
        0x000073c9, 0x000073cf, 0x000073d6, 0x000073d9, 0x000073e3, 0x000073e9,
    ],
    [
        0x00007407, 0x0000740a, 0x0000741a, 0x0000741b, 0x0000fa4a, 0x00007426, 0x00007428, 0x0000742a,
        0x0000742b, 0x0000742c, 0x0000742e, 0x0000742f, 0x00007430, 0x00007444, 0x00007446, 0x00007447,
        0x0000744b, 0x00007457, 0x00007462, 0x0000746b, 0x0000746d, 0x00007486, 0x00007487, 0x00007489,
        0x00007498, 0x0000749c, 0x0000749f, 0x000074a3, 0x00007490, 0x000074a6, 0x000074a8, 0x000074a9,
        0x000074b5, 0x000074bf, 0x000074c8, 0x000074c9, 0x000074da, 0x000074ff, 0x00007501, 0x00007517,
        0x0000752f, 0x0000756f, 0x00007579, 0x00007592, 0x00003f72, 0x000075ce, 0x000075e4, 0x00007600,
        0x00007602, 0x00007608, 0x00007615, 0x00007616, 0x00007619, 0x0000761e, 0x0000762d, 0x00007635,
        0x00007643, 0x0000764b, 0x00007664, 0x00007665, 0x0000766d, 0x0000766f, 0x00007671, 0x00007681,
        0x0000769b, 0x0000769d, 0x0000769e, 0x000076a6, 0x000076aa, 0x000076b6, 0x000076c5, 0x000076cc,
        0x000076ce, 0x000076d4, 0x000076e6, 0x000076f1, 0x000076fc, 0x0000770a, 0x00007719, 0x00007734,
        0x00007736, 0x00007746, 0x0000774d, 0x0000774e, 0x0000775c, 0x0000775f, 0x00007762, 0x0000777a,
        0x00007780, 0x00007794, 0x000077aa, 0x000077e0, 0x0000782d, 0x0002548e,
    ],
    [
        0x00007843, 0x0000784e, 0x0000784f, 0x00007851, 0x00007868, 0x0000786e, 0x0000fa4b, 0x000078b0,
        0x0002550e, 0x000078ad, 0x000078e4, 0x000078f2, 0x00007900, 0x000078f7, 0x0000791c, 0x0000792e,
        0x00007931, 0x00007934, 0x0000fa4c, 0x0000fa4d, 0x00007945, 0x00007946, 0x0000fa4e, 0x0000fa4f,
        0x0000fa50, 0x0000795c, 0x0000fa51, 0x0000fa19, 0x0000fa1a, 0x00007979, 0x0000fa52, 0x0000fa53,
        0x0000fa1b, 0x00007998, 0x000079b1, 0x000079b8, 0x000079c8, 0x000079ca, 0x00025771, 0x000079d4,
        0x000079de, 0x000079eb, 0x000079ed, 0x00007a03, 0x0000fa54, 0x00007a39, 0x00007a5d, 0x00007a6d,
        0x0000fa55, 0x00007a85, 0x00007aa0, 0x000259c4, 0x00007ab3, 0x00007abb, 0x00007ace, 0x00007aeb,
        0x00007afd, 0x00007b12, 0x00007b2d, 0x00007b3b, 0x00007b47, 0x00007b4e, 0x00007b60, 0x00007b6d,
        0x00007b6f, 0x00007b72, 0x00007b9e, 0x0000fa56, 0x00007bd7, 0x00007bd9, 0x00007c01, 0x00007c31,
        0x00007c1e, 0x00007c20, 0x00007c33, 0x00007c36, 0x00004264, 0x00025da1, 0x00007c59, 0x00007c6d,
        0x00007c79, 0x00007c8f, 0x00007c94, 0x00007ca0, 0x00007cbc, 0x00007cd5, 0x00007cd9, 0x00007cdd,
        0x00007d07, 0x00007d08, 0x00007d13, 0x00007d1d, 0x00007d23, 0x00007d31,
    ],
    [
        0x00007d41, 0x00007d48, 0x00007d53, 0x00007d5c, 0x00007d7a, 0x00007d83, 0x00007d8b, 0x00007da0,
        0x00007da6, 0x00007dc2, 0x00007dcc, 0x00007dd6, 0x00007de3, 0x0000fa57, 0x00007e28, 0x00007e08,
        0x00007e11, 0x00007e15, 0x0000fa59, 0x00007e47, 0x00007e52, 0x00007e61, 0x00007e8a, 0x00007e8d,
        0x00007f47, 0x0000fa5a, 0x00007f91, 0x00007f97, 0x00007fbf, 0x00007fce, 0x00007fdb, 0x00007fdf,
        0x00007fec, 0x00007fee, 0x00007ffa, 0x0000fa5b, 0x00008014, 0x00008026, 0x00008035, 0x00008037,
        0x0000803c, 0x000080ca, 0x000080d7, 0x000080e0, 0x000080f3, 0x00008118, 0x0000814a, 0x00008160,
        0x00008167, 0x00008168, 0x0000816d, 0x000081bb, 0x000081ca, 0x000081cf, 0x000081d7, 0x0000fa5c,
        0x00004453, 0x0000445b, 0x00008260, 0x00008274, 0x00026aff, 0x0000828e, 0x000082a1, 0x000082a3,
        0x000082a4, 0x000082a9, 0x000082ae, 0x000082b7, 0x000082be, 0x000082bf, 0x000082c6, 0x000082d5,
        0x000082fd, 0x000082fe, 0x00008300, 0x00008301, 0x00008362, 0x00008322, 0x0000832d, 0x0000833a,
        0x00008343, 0x00008347, 0x00008351, 0x00008355, 0x0000837d, 0x00008386, 0x00008392, 0x00008398,
        0x000083a7, 0x000083a9, 0x000083bf, 0x000083c0, 0x000083c7, 0x000083cf,
    ],
    [
        0x000083d1, 0x000083e1, 0x000083ea, 0x00008401, 0x00008406, 0x0000840a, 0x0000fa5f, 0x00008448,
        0x0000845f, 0x00008470, 0x00008473, 0x00008485, 0x0000849e, 0x000084af, 0x000084b4, 0x000084ba,
        0x000084c0, 0x000084c2, 0x00026e40, 0x00008532, 0x0000851e, 0x00008523, 0x0000852f, 0x00008559,
        0x00008564, 0x0000fa1f, 0x000085ad, 0x0000857a, 0x0000858c, 0x0000858f, 0x000085a2, 0x000085b0,
        0x000085cb, 0x000085ce, 0x000085ed, 0x00008612, 0x000085ff, 0x00008604, 0x00008605, 0x00008610,
        0x000270f4, 0x00008618, 0x00008629, 0x00008638, 0x00008657, 0x0000865b, 0x0000f936, 0x00008662,
        0x0000459d, 0x0000866c, 0x00008675, 0x00008698, 0x000086b8, 0x000086fa, 0x000086fc, 0x000086fd,
        0x0000870b, 0x00008771, 0x00008787, 0x00008788, 0x000087ac, 0x000087ad, 0x000087b5, 0x000045ea,
        0x000087d6, 0x000087ec, 0x00008806, 0x0000880a, 0x00008810, 0x00008814, 0x0000881f, 0x00008898,
        0x000088aa, 0x000088ca, 0x000088ce, 0x00027684, 0x000088f5, 0x0000891c, 0x0000fa60, 0x00008918,
        0x00008919, 0x0000891a, 0x00008927, 0x00008930, 0x00008932, 0x00008939, 0x00008940, 0x00008994,
        0x0000fa61, 0x000089d4, 0x000089e5, 0x000089f6, 0x00008a12, 0x00008a15,
    ],
    [
        0x00008a22, 0x00008a37, 0x00008a47, 0x00008a4e, 0x00008a5d, 0x00008a61, 0x00008a75, 0x00008a79,
        0x00008aa7, 0x00008ad0, 0x00008adf, 0x00008af4, 0x00008af6, 0x0000fa22, 0x0000fa62, 0x0000fa63,
        0x00008b46, 0x00008b54, 0x00008b59, 0x00008b69, 0x00008b9d, 0x00008c49, 0x00008c68, 0x0000fa64,
        0x00008ce1, 0x00008cf4, 0x00008cf8, 0x00008cfe, 0x0000fa65, 0x00008d12, 0x00008d1b, 0x00008daf,
        0x00008dce, 0x00008dd1, 0x00008dd7, 0x00008e20, 0x00008e23, 0x00008e3d, 0x00008e70, 0x00008e7b,
        0x00028277, 0x00008ec0, 0x00004844, 0x00008efa, 0x00008f1e, 0x00008f2d, 0x00008f36, 0x00008f54,
        0x000283cd, 0x00008fa6, 0x00008fb5, 0x00008fe4, 0x00008fe8, 0x00008fee, 0x00009008, 0x0000902d,
        0x0000fa67, 0x00009088, 0x00009095, 0x00009097, 0x00009099, 0x0000909b, 0x000090a2, 0x000090b3,
        0x000090be, 0x000090c4, 0x000090c5, 0x000090c7, 0x000090d7, 0x000090dd, 0x000090de, 0x000090ef,
        0x000090f4, 0x0000fa26, 0x00009114, 0x00009115, 0x00009116, 0x00009122, 0x00009123, 0x00009127,
        0x0000912f, 0x00009131, 0x00009134, 0x0000913d, 0x00009148, 0x0000915b, 0x00009183, 0x0000919e,
        0x000091ac, 0x000091b1, 0x000091bc, 0x000091d7, 0x000091fb, 0x000091e4,
    ],
    [
        0x000091e5, 0x000091ed, 0x000091f1, 0x00009207, 0x00009210, 0x00009238, 0x00009239, 0x0000923a,
        0x0000923c, 0x00009240, 0x00009243, 0x0000924f, 0x00009278, 0x00009288, 0x000092c2, 0x000092cb,
        0x000092cc, 0x000092d3, 0x000092e0, 0x000092ff, 0x00009304, 0x0000931f, 0x00009321, 0x00009325,
        0x00009348, 0x00009349, 0x0000934a, 0x00009364, 0x00009365, 0x0000936a, 0x00009370, 0x0000939b,
        0x000093a3, 0x000093ba, 0x000093c6, 0x000093de, 0x000093df, 0x00009404, 0x000093fd, 0x00009433,
        0x0000944a, 0x00009463, 0x0000946b, 0x00009471, 0x00009472, 0x0000958e, 0x0000959f, 0x000095a6,
        0x000095a9, 0x000095ac, 0x000095b6, 0x000095bd, 0x000095cb, 0x000095d0, 0x000095d3, 0x000049b0,
        0x000095da, 0x000095de, 0x00009658, 0x00009684, 0x0000f9dc, 0x0000969d, 0x000096a4, 0x000096a5,
        0x000096d2, 0x000096de, 0x0000fa68, 0x000096e9, 0x000096ef, 0x00009733, 0x0000973b, 0x0000974d,
        0x0000974e, 0x0000974f, 0x0000975a, 0x0000976e, 0x00009773, 0x00009795, 0x000097ae, 0x000097ba,
        0x000097c1, 0x000097c9, 0x000097de, 0x000097db, 0x000097f4, 0x0000fa69, 0x0000980a, 0x0000981e,
        0x0000982b, 0x00009830, 0x0000fa6a, 0x00009852, 0x00009853, 0x00009856,
    ],
    [
        0x00009857, 0x00009859, 0x0000985a, 0x0000f9d0, 0x00009865, 0x0000986c, 0x000098ba, 0x000098c8,
        0x000098e7, 0x00009958, 0x0000999e, 0x00009a02, 0x00009a03, 0x00009a24, 0x00009a2d, 0x00009a2e,
        0x00009a38, 0x00009a4a, 0x00009a4e, 0x00009a52, 0x00009ab6, 0x00009ac1, 0x00009ac3, 0x00009ace,
        0x00009ad6, 0x00009af9, 0x00009b02, 0x00009b08, 0x00009b20, 0x00004c17, 0x00009b2d, 0x00009b5e,
        0x00009b79, 0x00009b66, 0x00009b72, 0x00009b75, 0x00009b84, 0x00009b8a, 0x00009b8f, 0x00009b9e,
        0x00009ba7, 0x00009bc1, 0x00009bce, 0x00009be5, 0x00009bf8, 0x00009bfd, 0x00009c00, 0x00009c23,
        0x00009c41, 0x00009c4f, 0x00009c50, 0x00009c53, 0x00009c63, 0x00009c65, 0x00009c77, 0x00009d1d,
        0x00009d1e, 0x00009d43, 0x00009d47, 0x00009d52, 0x00009d63, 0x00009d70, 0x00009d7c, 0x00009d8a,
        0x00009d96, 0x00009dc0, 0x00009dac, 0x00009dbc, 0x00009dd7, 0x0002a190, 0x00009de7, 0x00009e07,
        0x00009e15, 0x00009e7c, 0x00009e9e, 0x00009ea4, 0x00009eac, 0x00009eaf, 0x00009eb4, 0x00009eb5,
        0x00009ec3, 0x00009ed1, 0x00009f10, 0x00009f39, 0x00009f57, 0x00009f90, 0x00009f94, 0x00009f97,
        0x00009fa2, 0x000059f8, 0x00005c5b, 0x00005e77, 0x00007626, 0x00007e6b,
    ],
];

static PLANE2_ROW_INDEX: [u8; 94] = [
    1, 0, 2, 3, 4, 0, 0, 5, 0, 0, 0, 6, 7, 8, 9, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 10, 11, 12,
    13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
];

static PLANE2: [[u32; 94]; 26] = [
    [
        0x00020089, 0x00004e02, 0x00004e0f, 0x00004e12, 0x00004e29, 0x00004e2b, 0x00004e2e, 0x00004e40,
        0x00004e47, 0x00004e48, 0x000200a2, 0x00004e51, 0x00003406, 0x000200a4, 0x00004e5a, 0x00004e69,
        0x00004e9d, 0x0000342c, 0x0000342e, 0x00004eb9, 0x00004ebb, 0x000201a2, 0x00004ebc, 0x00004ec3,
        0x00004ec8, 0x00004ed0, 0x00004eeb, 0x00004eda, 0x00004ef1, 0x00004ef5, 0x00004f00, 0x00004f16,
        0x00004f64, 0x00004f37, 0x00004f3e, 0x00004f54, 0x00004f58, 0x00020213, 0x00004f77, 0x00004f78,
        0x00004f7a, 0x00004f7d, 0x00004f82, 0x00004f85, 0x00004f92, 0x00004f9a, 0x00004fe6, 0x00004fb2,
        0x00004fbe, 0x00004fc5, 0x00004fcb, 0x00004fcf, 0x00004fd2, 0x0000346a, 0x00004ff2, 0x00005000,
        0x00005010, 0x00005013, 0x0000501c, 0x0000501e, 0x00005022, 0x00003468, 0x00005042, 0x00005046,
        0x0000504e, 0x00005053, 0x00005057, 0x00005063, 0x00005066, 0x0000506a, 0x00005070, 0x000050a3,
        0x00005088, 0x00005092, 0x00005093, 0x00005095, 0x00005096, 0x0000509c, 0x000050aa, 0x0002032b,
        0x000050b1, 0x000050ba, 0x000050bb, 0x000050c4, 0x000050c7, 0x000050f3, 0x00020381, 0x000050ce,
        0x00020371, 0x000050d4, 0x000050d9, 0x000050e1, 0x000050e9, 0x00003492,
    ],
    [
        0x00005108, 0x000203f9, 0x00005117, 0x0000511b, 0x0002044a, 0x00005160, 0x00020509, 0x00005173,
        0x00005183, 0x0000518b, 0x000034bc, 0x00005198, 0x000051a3, 0x000051ad, 0x000034c7, 0x000051bc,
        0x000205d6, 0x00020628, 0x000051f3, 0x000051f4, 0x00005202, 0x00005212, 0x00005216, 0x0002074f,
        0x00005255, 0x0000525c, 0x0000526c, 0x00005277, 0x00005284, 0x00005282, 0x00020807, 0x00005298,
        0x0002083a, 0x000052a4, 0x000052a6, 0x000052af, 0x000052ba, 0x000052bb, 0x000052ca, 0x0000351f,
        0x000052d1, 0x000208b9, 0x000052f7, 0x0000530a, 0x0000530b, 0x00005324, 0x00005335, 0x0000533e,
        0x00005342, 0x0002097c, 0x0002099d, 0x00005367, 0x0000536c, 0x0000537a, 0x000053a4, 0x000053b4,
        0x00020ad3, 0x000053b7, 0x000053c0, 0x00020b1d, 0x0000355d, 0x0000355e, 0x000053d5, 0x000053da,
        0x00003563, 0x000053f4, 0x000053f5, 0x00005455, 0x00005424, 0x00005428, 0x0000356e, 0x00005443,
        0x00005462, 0x00005466, 0x0000546c, 0x0000548a, 0x0000548d, 0x00005495, 0x000054a0, 0x000054a6,
        0x000054ad, 0x000054ae, 0x000054b7, 0x000054ba, 0x000054bf, 0x000054c3, 0x00020d45, 0x000054ec,
        0x000054ef, 0x000054f1, 0x000054f3, 0x00005500, 0x00005501, 0x00005509,
    ],
    [
        0x0000553c, 0x00005541, 0x000035a6, 0x00005547, 0x0000554a, 0x000035a8, 0x00005560, 0x00005561,
        0x00005564, 0x00020de1, 0x0000557d, 0x00005582, 0x00005588, 0x00005591, 0x000035c5, 0x000055d2,
        0x00020e95, 0x00020e6d, 0x000055bf, 0x000055c9, 0x000055cc, 0x000055d1, 0x000055dd, 0x000035da,
        0x000055e2, 0x00020e64, 0x000055e9, 0x00005628, 0x00020f5f, 0x00005607, 0x00005610, 0x00005630,
        0x00005637, 0x000035f4, 0x0000563d, 0x0000563f, 0x00005640, 0x00005647, 0x0000565e, 0x00005660,
        0x0000566d, 0x00003605, 0x00005688, 0x0000568c, 0x00005695, 0x0000569a, 0x0000569d, 0x000056a8,
        0x000056ad, 0x000056b2, 0x000056c5, 0x000056cd, 0x000056df, 0x000056e8, 0x000056f6, 0x000056f7,
        0x00021201, 0x00005715, 0x00005723, 0x00021255, 0x00005729, 0x0002127b, 0x00005745, 0x00005746,
        0x0000574c, 0x0000574d, 0x00021274, 0x00005768, 0x0000576f, 0x00005773, 0x00005774, 0x00005775,
        0x0000577b, 0x000212e4, 0x000212d7, 0x000057ac, 0x0000579a, 0x0000579d, 0x0000579e, 0x000057a8,
        0x000057d7, 0x000212fd, 0x000057cc, 0x00021336, 0x00021344, 0x000057de, 0x000057e6, 0x000057f0,
        0x0000364a, 0x000057f8, 0x000057fb, 0x000057fd, 0x00005804, 0x0000581e,
    ],
    [
        0x00005820, 0x00005827, 0x00005832, 0x00005839, 0x000213c4, 0x00005849, 0x0000584c, 0x00005867,
        0x0000588a, 0x0000588b, 0x0000588d, 0x0000588f, 0x00005890, 0x00005894, 0x0000589d, 0x000058aa,
        0x000058b1, 0x0002146d, 0x000058c3, 0x000058cd, 0x000058e2, 0x000058f3, 0x000058f4, 0x00005905,
        0x00005906, 0x0000590b, 0x0000590d, 0x00005914, 0x00005924, 0x000215d7, 0x00003691, 0x0000593d,
        0x00003699, 0x00005946, 0x00003696, 0x00026c29, 0x0000595b, 0x0000595f, 0x00021647, 0x00005975,
        0x00005976, 0x0000597c, 0x0000599f, 0x000059ae, 0x000059bc, 0x000059c8, 0x000059cd, 0x000059de,
        0x000059e3, 0x000059e4, 0x000059e7, 0x000059ee, 0x00021706, 0x00021742, 0x000036cf, 0x00005a0c,
        0x00005a0d, 0x00005a17, 0x00005a27, 0x00005a2d, 0x00005a55, 0x00005a65, 0x00005a7a, 0x00005a8b,
        0x00005a9c, 0x00005a9f, 0x00005aa0, 0x00005aa2, 0x00005ab1, 0x00005ab3, 0x00005ab5, 0x00005aba,
        0x00005abf, 0x00005ada, 0x00005adc, 0x00005ae0, 0x00005ae5, 0x00005af0, 0x00005aee, 0x00005af5,
        0x00005b00, 0x00005b08, 0x00005b17, 0x00005b34, 0x00005b2d, 0x00005b4c, 0x00005b52, 0x00005b68,
        0x00005b6f, 0x00005b7c, 0x00005b7f, 0x00005b81, 0x00005b84, 0x000219c3,
    ],
    [
        0x00005b96, 0x00005bac, 0x00003761, 0x00005bc0, 0x00003762, 0x00005bce, 0x00005bd6, 0x0000376c,
        0x0000376b, 0x00005bf1, 0x00005bfd, 0x00003775, 0x00005c03, 0x00005c29, 0x00005c30, 0x00021c56,
        0x00005c5f, 0x00005c63, 0x00005c67, 0x00005c68, 0x00005c69, 0x00005c70, 0x00021d2d, 0x00021d45,
        0x00005c7c, 0x00021d78, 0x00021d62, 0x00005c88, 0x00005c8a, 0x000037c1, 0x00021da1, 0x00021d9c,
        0x00005ca0, 0x00005ca2, 0x00005ca6, 0x00005ca7, 0x00021d92, 0x00005cad, 0x00005cb5, 0x00021db7,
        0x00005cc9, 0x00021de0, 0x00021e33, 0x00005d06, 0x00005d10, 0x00005d2b, 0x00005d1d, 0x00005d20,
        0x00005d24, 0x00005d26, 0x00005d31, 0x00005d39, 0x00005d42, 0x000037e8, 0x00005d61, 0x00005d6a,
        0x000037f4, 0x00005d70, 0x00021f1e, 0x000037fd, 0x00005d88, 0x00003800, 0x00005d92, 0x00005d94,
        0x00005d97, 0x00005d99, 0x00005db0, 0x00005db2, 0x00005db4, 0x00021f76, 0x00005db9, 0x00005dd1,
        0x00005dd7, 0x00005dd8, 0x00005de0, 0x00021ffa, 0x00005de4, 0x00005de9, 0x0000382f, 0x00005e00,
        0x00003836, 0x00005e12, 0x00005e15, 0x00003840, 0x00005e1f, 0x00005e2e, 0x00005e3e, 0x00005e49,
        0x0000385c, 0x00005e56, 0x00003861, 0x00005e6b, 0x00005e6c, 0x00005e6d,
    ],
    [
        0x00005e6e, 0x0002217b, 0x00005ea5, 0x00005eaa, 0x00005eac, 0x00005eb9, 0x00005ebf, 0x00005ec6,
        0x00005ed2, 0x00005ed9, 0x0002231e, 0x00005efd, 0x00005f08, 0x00005f0e, 0x00005f1c, 0x000223ad,
        0x00005f1e, 0x00005f47, 0x00005f63, 0x00005f72, 0x00005f7e, 0x00005f8f, 0x00005fa2, 0x00005fa4,
        0x00005fb8, 0x00005fc4, 0x000038fa, 0x00005fc7, 0x00005fcb, 0x00005fd2, 0x00005fd3, 0x00005fd4,
        0x00005fe2, 0x00005fee, 0x00005fef, 0x00005ff3, 0x00005ffc, 0x00003917, 0x00006017, 0x00006022,
        0x00006024, 0x0000391a, 0x0000604c, 0x0000607f, 0x0000608a, 0x00006095, 0x000060a8, 0x000226f3,
        0x000060b0, 0x000060b1, 0x000060be, 0x000060c8, 0x000060d9, 0x000060db, 0x000060ee, 0x000060f2,
        0x000060f5, 0x00006110, 0x00006112, 0x00006113, 0x00006119, 0x0000611e, 0x0000613a, 0x0000396f,
        0x00006141, 0x00006146, 0x00006160, 0x0000617c, 0x0002285b, 0x00006192, 0x00006193, 0x00006197,
        0x00006198, 0x000061a5, 0x000061a8, 0x000061ad, 0x000228ab, 0x000061d5, 0x000061dd, 0x000061df,
        0x000061f5, 0x0002298f, 0x00006215, 0x00006223, 0x00006229, 0x00006246, 0x0000624c, 0x00006251,
        0x00006252, 0x00006261, 0x00006264, 0x0000627b, 0x0000626d, 0x00006273,
    ],
    [
        0x00006299, 0x000062a6, 0x000062d5, 0x00022ab8, 0x000062fd, 0x00006303, 0x0000630d, 0x00006310,
        0x00022b4f, 0x00022b50, 0x00006332, 0x00006335, 0x0000633b, 0x0000633c, 0x00006341, 0x00006344,
        0x0000634e, 0x00022b46, 0x00006359, 0x00022c1d, 0x00022ba6, 0x0000636c, 0x00006384, 0x00006399,
        0x00022c24, 0x00006394, 0x000063bd, 0x000063f7, 0x000063d4, 0x000063d5, 0x000063dc, 0x000063e0,
        0x000063eb, 0x000063ec, 0x000063f2, 0x00006409, 0x0000641e, 0x00006425, 0x00006429, 0x0000642f,
        0x0000645a, 0x0000645b, 0x0000645d, 0x00006473, 0x0000647d, 0x00006487, 0x00006491, 0x0000649d,
        0x0000649f, 0x000064cb, 0x000064cc, 0x000064d5, 0x000064d7, 0x00022de1, 0x000064e4, 0x000064e5,
        0x000064ff, 0x00006504, 0x00003a6e, 0x0000650f, 0x00006514, 0x00006516, 0x00003a73, 0x0000651e,
        0x00006532, 0x00006544, 0x00006554, 0x0000656b, 0x0000657a, 0x00006581, 0x00006584, 0x00006585,
        0x0000658a, 0x000065b2, 0x000065b5, 0x000065b8, 0x000065bf, 0x000065c2, 0x000065c9, 0x000065d4,
        0x00003ad6, 0x000065f2, 0x000065f9, 0x000065fc, 0x00006604, 0x00006608, 0x00006621, 0x0000662a,
        0x00006645, 0x00006651, 0x0000664e, 0x00003aea, 0x000231c3, 0x00006657,
    ],
    [
        0x0000665b, 0x00006663, 0x000231f5, 0x000231b6, 0x0000666a, 0x0000666b, 0x0000666c, 0x0000666d,
        0x0000667b, 0x00006680, 0x00006690, 0x00006692, 0x00006699, 0x00003b0e, 0x000066ad, 0x000066b1,
        0x000066b5, 0x00003b1a, 0x000066bf, 0x00003b1c, 0x000066ec, 0x00003ad7, 0x00006701, 0x00006705,
        0x00006712, 0x00023372, 0x00006719, 0x000233d3, 0x000233d2, 0x0000674c, 0x0000674d, 0x00006754,
        0x0000675d, 0x000233d0, 0x000233e4, 0x000233d5, 0x00006774, 0x00006776, 0x000233da, 0x00006792,
        0x000233df, 0x00008363, 0x00006810, 0x000067b0, 0x000067b2, 0x000067c3, 0x000067c8, 0x000067d2,
        0x000067d9, 0x000067db, 0x000067f0, 0x000067f7, 0x0002344a, 0x00023451, 0x0002344b, 0x00006818,
        0x0000681f, 0x0000682d, 0x00023465, 0x00006833, 0x0000683b, 0x0000683e, 0x00006844, 0x00006845,
        0x00006849, 0x0000684c, 0x00006855, 0x00006857, 0x00003b77, 0x0000686b, 0x0000686e, 0x0000687a,
        0x0000687c, 0x00006882, 0x00006890, 0x00006896, 0x00003b6d, 0x00006898, 0x00006899, 0x0000689a,
        0x0000689c, 0x000068aa, 0x000068ab, 0x000068b4, 0x000068bb, 0x000068fb, 0x000234e4, 0x0002355a,
        0x0000fa13, 0x000068c3, 0x000068c5, 0x000068cc, 0x000068cf, 0x000068d6,
    ],
    [
        0x000068d9, 0x000068e4, 0x000068e5, 0x000068ec, 0x000068f7, 0x00006903, 0x00006907, 0x00003b87,
        0x00003b88, 0x00023594, 0x0000693b, 0x00003b8d, 0x00006946, 0x00006969, 0x0000696c, 0x00006972,
        0x0000697a, 0x0000697f, 0x00006992, 0x00003ba4, 0x00006996, 0x00006998, 0x000069a6, 0x000069b0,
        0x000069b7, 0x000069ba, 0x000069bc, 0x000069c0, 0x000069d1, 0x000069d6, 0x00023639, 0x00023647,
        0x00006a30, 0x00023638, 0x0002363a, 0x000069e3, 0x000069ee, 0x000069ef, 0x000069f3, 0x00003bcd,
        0x000069f4, 0x000069fe, 0x00006a11, 0x00006a1a, 0x00006a1d, 0x0002371c, 0x00006a32, 0x00006a33,
        0x00006a34, 0x00006a3f, 0x00006a46, 0x00006a49, 0x00006a7a, 0x00006a4e, 0x00006a52, 0x00006a64,
        0x0002370c, 0x00006a7e, 0x00006a83, 0x00006a8b, 0x00003bf0, 0x00006a91, 0x00006a9f, 0x00006aa1,
        0x00023764, 0x00006aab, 0x00006abd, 0x00006ac6, 0x00006ad4, 0x00006ad0, 0x00006adc, 0x00006add,
        0x000237ff, 0x000237e7, 0x00006aec, 0x00006af1, 0x00006af2, 0x00006af3, 0x00006afd, 0x00023824,
        0x00006b0b, 0x00006b0f, 0x00006b10, 0x00006b11, 0x0002383d, 0x00006b17, 0x00003c26, 0x00006b2f,
        0x00006b4a, 0x00006b58, 0x00006b6c, 0x00006b75, 0x00006b7a, 0x00006b81,
    ],
    [
        0x00006b9b, 0x00006bae, 0x00023a98, 0x00006bbd, 0x00006bbe, 0x00006bc7, 0x00006bc8, 0x00006bc9,
        0x00006bda, 0x00006be6, 0x00006be7, 0x00006bee, 0x00006bf1, 0x00006c02, 0x00006c0a, 0x00006c0e,
        0x00006c35, 0x00006c36, 0x00006c3a, 0x00023c7f, 0x00006c3f, 0x00006c4d, 0x00006c5b, 0x00006c6d,
        0x00006c84, 0x00006c89, 0x00003cc3, 0x00006c94, 0x00006c95, 0x00006c97, 0x00006cad, 0x00006cc2,
        0x00006cd0, 0x00003cd2, 0x00006cd6, 0x00006cda, 0x00006cdc, 0x00006ce9, 0x00006cec, 0x00006ced,
        0x00023d00, 0x00006d00, 0x00006d0a, 0x00006d24, 0x00006d26, 0x00006d27, 0x00006c67, 0x00006d2f,
        0x00006d3c, 0x00006d5b, 0x00006d5e, 0x00006d60, 0x00006d70, 0x00006d80, 0x00006d81, 0x00006d8a,
        0x00006d8d, 0x00006d91, 0x00006d98, 0x00023d40, 0x00006e17, 0x00023dfa, 0x00023df9, 0x00023dd3,
        0x00006dab, 0x00006dae, 0x00006db4, 0x00006dc2, 0x00006d34, 0x00006dc8, 0x00006dce, 0x00006dcf,
        0x00006dd0, 0x00006ddf, 0x00006de9, 0x00006df6, 0x00006e36, 0x00006e1e, 0x00006e22, 0x00006e27,
        0x00003d11, 0x00006e32, 0x00006e3c, 0x00006e48, 0x00006e49, 0x00006e4b, 0x00006e4c, 0x00006e4f,
        0x00006e51, 0x00006e53, 0x00006e54, 0x00006e57, 0x00006e63, 0x00003d1e,
    ],
    [
        0x00006e93, 0x00006ea7, 0x00006eb4, 0x00006ebf, 0x00006ec3, 0x00006eca, 0x00006ed9, 0x00006f35,
        0x00006eeb, 0x00006ef9, 0x00006efb, 0x00006f0a, 0x00006f0c, 0x00006f18, 0x00006f25, 0x00006f36,
        0x00006f3c, 0x00023f7e, 0x00006f52, 0x00006f57, 0x00006f5a, 0x00006f60, 0x00006f68, 0x00006f98,
        0x00006f7d, 0x00006f90, 0x00006f96, 0x00006fbe, 0x00006f9f, 0x00006fa5, 0x00006faf, 0x00003d64,
        0x00006fb5, 0x00006fc8, 0x00006fc9, 0x00006fda, 0x00006fde, 0x00006fe9, 0x00024096, 0x00006ffc,
        0x00007000, 0x00007007, 0x0000700a, 0x00007023, 0x00024103, 0x00007039, 0x0000703a, 0x0000703c,
        0x00007043, 0x00007047, 0x0000704b, 0x00003d9a, 0x00007054, 0x00007065, 0x00007069, 0x0000706c,
        0x0000706e, 0x00007076, 0x0000707e, 0x00007081, 0x00007086, 0x00007095, 0x00007097, 0x000070bb,
        0x000241c6, 0x0000709f, 0x000070b1, 0x000241fe, 0x000070ec, 0x000070ca, 0x000070d1, 0x000070d3,
        0x000070dc, 0x00007103, 0x00007104, 0x00007106, 0x00007107, 0x00007108, 0x0000710c, 0x00003dc0,
        0x0000712f, 0x00007131, 0x00007150, 0x0000714a, 0x00007153, 0x0000715e, 0x00003dd4, 0x00007196,
        0x00007180, 0x0000719b, 0x000071a0, 0x000071a2, 0x000071ae, 0x000071af,
    ],
    [
        0x000071b3, 0x000243bc, 0x000071cb, 0x000071d3, 0x000071d9, 0x000071dc, 0x00007207, 0x00003e05,
        0x0000fa49, 0x0000722b, 0x00007234, 0x00007238, 0x00007239, 0x00004e2c, 0x00007242, 0x00007253,
        0x00007257, 0x00007263, 0x00024629, 0x0000726e, 0x0000726f, 0x00007278, 0x0000727f, 0x0000728e,
        0x000246a5, 0x000072ad, 0x000072ae, 0x000072b0, 0x000072b1, 0x000072c1, 0x00003e60, 0x000072cc,
        0x00003e66, 0x00003e68, 0x000072f3, 0x000072fa, 0x00007307, 0x00007312, 0x00007318, 0x00007319,
        0x00003e83, 0x00007339, 0x0000732c, 0x00007331, 0x00007333, 0x0000733d, 0x00007352, 0x00003e94,
        0x0000736b, 0x0000736c, 0x00024896, 0x0000736e, 0x0000736f, 0x00007371, 0x00007377, 0x00007381,
        0x00007385, 0x0000738a, 0x00007394, 0x00007398, 0x0000739c, 0x0000739e, 0x000073a5, 0x000073a8,
        0x000073b5, 0x000073b7, 0x000073b9, 0x000073bc, 0x000073bf, 0x000073c5, 0x000073cb, 0x000073e1,
        0x000073e7, 0x000073f9, 0x00007413, 0x000073fa, 0x00007401, 0x00007424, 0x00007431, 0x00007439,
        0x00007453, 0x00007440, 0x00007443, 0x0000744d, 0x00007452, 0x0000745d, 0x00007471, 0x00007481,
        0x00007485, 0x00007488, 0x00024a4d, 0x00007492, 0x00007497, 0x00007499,
    ],
    [
        0x000074a0, 0x000074a1, 0x000074a5, 0x000074aa, 0x000074ab, 0x000074b9, 0x000074bb, 0x000074ba,
        0x000074d6, 0x000074d8, 0x000074de, 0x000074ef, 0x000074eb, 0x00024b56, 0x000074fa, 0x00024b6f,
        0x00007520, 0x00007524, 0x0000752a, 0x00003f57, 0x00024c16, 0x0000753d, 0x0000753e, 0x00007540,
        0x00007548, 0x0000754e, 0x00007550, 0x00007552, 0x0000756c, 0x00007572, 0x00007571, 0x0000757a,
        0x0000757d, 0x0000757e, 0x00007581, 0x00024d14, 0x0000758c, 0x00003f75, 0x000075a2, 0x00003f77,
        0x000075b0, 0x000075b7, 0x000075bf, 0x000075c0, 0x000075c6, 0x000075cf, 0x000075d3, 0x000075dd,
        0x000075df, 0x000075e0, 0x000075e7, 0x000075ec, 0x000075ee, 0x000075f1, 0x000075f9, 0x00007603,
        0x00007618, 0x00007607, 0x0000760f, 0x00003fae, 0x00024e0e, 0x00007613, 0x0000761b, 0x0000761c,
        0x00024e37, 0x00007625, 0x00007628, 0x0000763c, 0x00007633, 0x00024e6a, 0x00003fc9, 0x00007641,
        0x00024e8b, 0x00007649, 0x00007655, 0x00003fd7, 0x0000766e, 0x00007695, 0x0000769c, 0x000076a1,
        0x000076a0, 0x000076a7, 0x000076a8, 0x000076af, 0x0002504a, 0x000076c9, 0x00025055, 0x000076e8,
        0x000076ec, 0x00025122, 0x00007717, 0x0000771a, 0x0000772d, 0x00007735,
    ],
    [
        0x000251a9, 0x00004039, 0x000251e5, 0x000251cd, 0x00007758, 0x00007760, 0x0000776a, 0x0002521e,
        0x00007772, 0x0000777c, 0x0000777d, 0x0002524c, 0x00004058, 0x0000779a, 0x0000779f, 0x000077a2,
        0x000077a4, 0x000077a9, 0x000077de, 0x000077df, 0x000077e4, 0x000077e6, 0x000077ea, 0x000077ec,
        0x00004093, 0x000077f0, 0x000077f4, 0x000077fb, 0x0002542e, 0x00007805, 0x00007806, 0x00007809,
        0x0000780d, 0x00007819, 0x00007821, 0x0000782c, 0x00007847, 0x00007864, 0x0000786a, 0x000254d9,
        0x0000788a, 0x00007894, 0x000078a4, 0x0000789d, 0x0000789e, 0x0000789f, 0x000078bb, 0x000078c8,
        0x000078cc, 0x000078ce, 0x000078d5, 0x000078e0, 0x000078e1, 0x000078e6, 0x000078f9, 0x000078fa,
        0x000078fb, 0x000078fe, 0x000255a7, 0x00007910, 0x0000791b, 0x00007930, 0x00007925, 0x0000793b,
        0x0000794a, 0x00007958, 0x0000795b, 0x00004105, 0x00007967, 0x00007972, 0x00007994, 0x00007995,
        0x00007996, 0x0000799b, 0x000079a1, 0x000079a9, 0x000079b4, 0x000079bb, 0x000079c2, 0x000079c7,
        0x000079cc, 0x000079cd, 0x000079d6, 0x00004148, 0x000257a9, 0x000257b4, 0x0000414f, 0x00007a0a,
        0x00007a11, 0x00007a15, 0x00007a1b, 0x00007a1e, 0x00004163, 0x00007a2d,
    ],
    [
        0x00007a38, 0x00007a47, 0x00007a4c, 0x00007a56, 0x00007a59, 0x00007a5c, 0x00007a5f, 0x00007a60,
        0x00007a67, 0x00007a6a, 0x00007a75, 0x00007a78, 0x00007a82, 0x00007a8a, 0x00007a90, 0x00007aa3,
        0x00007aac, 0x000259d4, 0x000041b4, 0x00007ab9, 0x00007abc, 0x00007abe, 0x000041bf, 0x00007acc,
        0x00007ad1, 0x00007ae7, 0x00007ae8, 0x00007af4, 0x00025ae4, 0x00025ae3, 0x00007b07, 0x00025af1,
        0x00007b3d, 0x00007b27, 0x00007b2a, 0x00007b2e, 0x00007b2f, 0x00007b31, 0x000041e6, 0x000041f3,
        0x00007b7f, 0x00007b41, 0x000041ee, 0x00007b55, 0x00007b79, 0x00007b64, 0x00007b66, 0x00007b69,
        0x00007b73, 0x00025bb2, 0x00004207, 0x00007b90, 0x00007b91, 0x00007b9b, 0x0000420e, 0x00007baf,
        0x00007bb5, 0x00007bbc, 0x00007bc5, 0x00007bca, 0x00025c4b, 0x00025c64, 0x00007bd4, 0x00007bd6,
        0x00007bda, 0x00007bea, 0x00007bf0, 0x00007c03, 0x00007c0b, 0x00007c0e, 0x00007c0f, 0x00007c26,
        0x00007c45, 0x00007c4a, 0x00007c51, 0x00007c57, 0x00007c5e, 0x00007c61, 0x00007c69, 0x00007c6e,
        0x00007c6f, 0x00007c70, 0x00025e2e, 0x00025e56, 0x00025e65, 0x00007ca6, 0x00025e62, 0x00007cb6,
        0x00007cb7, 0x00007cbf, 0x00025ed8, 0x00007cc4, 0x00025ec2, 0x00007cc8,
    ],
    [
        0x00007ccd, 0x00025ee8, 0x00007cd7, 0x00025f23, 0x00007ce6, 0x00007ceb, 0x00025f5c, 0x00007cf5,
        0x00007d03, 0x00007d09, 0x000042c6, 0x00007d12, 0x00007d1e, 0x00025fe0, 0x00025fd4, 0x00007d3d,
        0x00007d3e, 0x00007d40, 0x00007d47, 0x0002600c, 0x00025ffb, 0x000042d6, 0x00007d59, 0x00007d5a,
        0x00007d6a, 0x00007d70, 0x000042dd, 0x00007d7f, 0x00026017, 0x00007d86, 0x00007d88, 0x00007d8c,
        0x00007d97, 0x00026060, 0x00007d9d, 0x00007da7, 0x00007daa, 0x00007db6, 0x00007db7, 0x00007dc0,
        0x00007dd7, 0x00007dd9, 0x00007de6, 0x00007df1, 0x00007df9, 0x00004302, 0x000260ed, 0x0000fa58,
        0x00007e10, 0x00007e17, 0x00007e1d, 0x00007e20, 0x00007e27, 0x00007e2c, 0x00007e45, 0x00007e73,
        0x00007e75, 0x00007e7e, 0x00007e86, 0x00007e87, 0x0000432b, 0x00007e91, 0x00007e98, 0x00007e9a,
        0x00004343, 0x00007f3c, 0x00007f3b, 0x00007f3e, 0x00007f43, 0x00007f44, 0x00007f4f, 0x000034c1,
        0x00026270, 0x00007f52, 0x00026286, 0x00007f61, 0x00007f63, 0x00007f64, 0x00007f6d, 0x00007f7d,
        0x00007f7e, 0x0002634c, 0x00007f90, 0x0000517b, 0x00023d0e, 0x00007f96, 0x00007f9c, 0x00007fad,
        0x00026402, 0x00007fc3, 0x00007fcf, 0x00007fe3, 0x00007fe5, 0x00007fef,
    ],
    [
        0x00007ff2, 0x00008002, 0x0000800a, 0x00008008, 0x0000800e, 0x00008011, 0x00008016, 0x00008024,
        0x0000802c, 0x00008030, 0x00008043, 0x00008066, 0x00008071, 0x00008075, 0x0000807b, 0x00008099,
        0x0000809c, 0x000080a4, 0x000080a7, 0x000080b8, 0x0002667e, 0x000080c5, 0x000080d5, 0x000080d8,
        0x000080e6, 0x000266b0, 0x0000810d, 0x000080f5, 0x000080fb, 0x000043ee, 0x00008135, 0x00008116,
        0x0000811e, 0x000043f0, 0x00008124, 0x00008127, 0x0000812c, 0x0002671d, 0x0000813d, 0x00004408,
        0x00008169, 0x00004417, 0x00008181, 0x0000441c, 0x00008184, 0x00008185, 0x00004422, 0x00008198,
        0x000081b2, 0x000081c1, 0x000081c3, 0x000081d6, 0x000081db, 0x000268dd, 0x000081e4, 0x000268ea,
        0x000081ec, 0x00026951, 0x000081fd, 0x000081ff, 0x0002696f, 0x00008204, 0x000269dd, 0x00008219,
        0x00008221, 0x00008222, 0x00026a1e, 0x00008232, 0x00008234, 0x0000823c, 0x00008246, 0x00008249,
        0x00008245, 0x00026a58, 0x0000824b, 0x00004476, 0x0000824f, 0x0000447a, 0x00008257, 0x00026a8c,
        0x0000825c, 0x00008263, 0x00026ab7, 0x0000fa5d, 0x0000fa5e, 0x00008279, 0x00004491, 0x0000827d,
        0x0000827f, 0x00008283, 0x0000828a, 0x00008293, 0x000082a7, 0x000082a8,
    ],
    [
        0x000082b2, 0x000082b4, 0x000082ba, 0x000082bc, 0x000082e2, 0x000082e8, 0x000082f7, 0x00008307,
        0x00008308, 0x0000830c, 0x00008354, 0x0000831b, 0x0000831d, 0x00008330, 0x0000833c, 0x00008344,
        0x00008357, 0x000044be, 0x0000837f, 0x000044d4, 0x000044b3, 0x0000838d, 0x00008394, 0x00008395,
        0x0000839b, 0x0000839d, 0x000083c9, 0x000083d0, 0x000083d4, 0x000083dd, 0x000083e5, 0x000083f9,
        0x0000840f, 0x00008411, 0x00008415, 0x00026c73, 0x00008417, 0x00008439, 0x0000844a, 0x0000844f,
        0x00008451, 0x00008452, 0x00008459, 0x0000845a, 0x0000845c, 0x00026cdd, 0x00008465, 0x00008476,
        0x00008478, 0x0000847c, 0x00008481, 0x0000450d, 0x000084dc, 0x00008497, 0x000084a6, 0x000084be,
        0x00004508, 0x000084ce, 0x000084cf, 0x000084d3, 0x00026e65, 0x000084e7, 0x000084ea, 0x000084ef,
        0x000084f0, 0x000084f1, 0x000084fa, 0x000084fd, 0x0000850c, 0x0000851b, 0x00008524, 0x00008525,
        0x0000852b, 0x00008534, 0x0000854f, 0x0000856f, 0x00004525, 0x00004543, 0x0000853e, 0x00008551,
        0x00008553, 0x0000855e, 0x00008561, 0x00008562, 0x00026f94, 0x0000857b, 0x0000857d, 0x0000857f,
        0x00008581, 0x00008586, 0x00008593, 0x0000859d, 0x0000859f, 0x00026ff8,
    ],
    [
        0x00026ff6, 0x00026ff7, 0x000085b7, 0x000085bc, 0x000085c7, 0x000085ca, 0x000085d8, 0x000085d9,
        0x000085df, 0x000085e1, 0x000085e6, 0x000085f6, 0x00008600, 0x00008611, 0x0000861e, 0x00008621,
        0x00008624, 0x00008627, 0x0002710d, 0x00008639, 0x0000863c, 0x00027139, 0x00008640, 0x0000fa20,
        0x00008653, 0x00008656, 0x0000866f, 0x00008677, 0x0000867a, 0x00008687, 0x00008689, 0x0000868d,
        0x00008691, 0x0000869c, 0x0000869d, 0x000086a8, 0x0000fa21, 0x000086b1, 0x000086b3, 0x000086c1,
        0x000086c3, 0x000086d1, 0x000086d5, 0x000086d7, 0x000086e3, 0x000086e6, 0x000045b8, 0x00008705,
        0x00008707, 0x0000870e, 0x00008710, 0x00008713, 0x00008719, 0x0000871f, 0x00008721, 0x00008723,
        0x00008731, 0x0000873a, 0x0000873e, 0x00008740, 0x00008743, 0x00008751, 0x00008758, 0x00008764,
        0x00008765, 0x00008772, 0x0000877c, 0x000273db, 0x000273da, 0x000087a7, 0x00008789, 0x0000878b,
        0x00008793, 0x000087a0, 0x000273fe, 0x000045e5, 0x000087be, 0x00027410, 0x000087c1, 0x000087ce,
        0x000087f5, 0x000087df, 0x00027449, 0x000087e3, 0x000087e5, 0x000087e6, 0x000087ea, 0x000087eb,
        0x000087ed, 0x00008801, 0x00008803, 0x0000880b, 0x00008813, 0x00008828,
    ],
    [
        0x0000882e, 0x00008832, 0x0000883c, 0x0000460f, 0x0000884a, 0x00008858, 0x0000885f, 0x00008864,
        0x00027615, 0x00027614, 0x00008869, 0x00027631, 0x0000886f, 0x000088a0, 0x000088bc, 0x000088bd,
        0x000088be, 0x000088c0, 0x000088d2, 0x00027693, 0x000088d1, 0x000088d3, 0x000088db, 0x000088f0,
        0x000088f1, 0x00004641, 0x00008901, 0x0002770e, 0x00008937, 0x00027723, 0x00008942, 0x00008945,
        0x00008949, 0x00027752, 0x00004665, 0x00008962, 0x00008980, 0x00008989, 0x00008990, 0x0000899f,
        0x000089b0, 0x000089b7, 0x000089d6, 0x000089d8, 0x000089eb, 0x000046a1, 0x000089f1, 0x000089f3,
        0x000089fd, 0x000089ff, 0x000046af, 0x00008a11, 0x00008a14, 0x00027985, 0x00008a21, 0x00008a35,
        0x00008a3e, 0x00008a45, 0x00008a4d, 0x00008a58, 0x00008aae, 0x00008a90, 0x00008ab7, 0x00008abe,
        0x00008ad7, 0x00008afc, 0x00027a84, 0x00008b0a, 0x00008b05, 0x00008b0d, 0x00008b1c, 0x00008b1f,
        0x00008b2d, 0x00008b43, 0x0000470c, 0x00008b51, 0x00008b5e, 0x00008b76, 0x00008b7f, 0x00008b81,
        0x00008b8b, 0x00008b94, 0x00008b95, 0x00008b9c, 0x00008b9e, 0x00008c39, 0x00027bb3, 0x00008c3d,
        0x00027bbe, 0x00027bc7, 0x00008c45, 0x00008c47, 0x00008c4f, 0x00008c54,
    ],
    [
        0x00008c57, 0x00008c69, 0x00008c6d, 0x00008c73, 0x00027cb8, 0x00008c93, 0x00008c92, 0x00008c99,
        0x00004764, 0x00008c9b, 0x00008ca4, 0x00008cd6, 0x00008cd5, 0x00008cd9, 0x00027da0, 0x00008cf0,
        0x00008cf1, 0x00027e10, 0x00008d09, 0x00008d0e, 0x00008d6c, 0x00008d84, 0x00008d95, 0x00008da6,
        0x00027fb7, 0x00008dc6, 0x00008dc8, 0x00008dd9, 0x00008dec, 0x00008e0c, 0x000047fd, 0x00008dfd,
        0x00008e06, 0x0002808a, 0x00008e14, 0x00008e16, 0x00008e21, 0x00008e22, 0x00008e27, 0x000280bb,
        0x00004816, 0x00008e36, 0x00008e39, 0x00008e4b, 0x00008e54, 0x00008e62, 0x00008e6c, 0x00008e6d,
        0x00008e6f, 0x00008e98, 0x00008e9e, 0x00008eae, 0x00008eb3, 0x00008eb5, 0x00008eb6, 0x00008ebb,
        0x00028282, 0x00008ed1, 0x00008ed4, 0x0000484e, 0x00008ef9, 0x000282f3, 0x00008f00, 0x00008f08,
        0x00008f17, 0x00008f2b, 0x00008f40, 0x00008f4a, 0x00008f58, 0x0002840c, 0x00008fa4, 0x00008fb4,
        0x0000fa66, 0x00008fb6, 0x00028455, 0x00008fc1, 0x00008fc6, 0x0000fa24, 0x00008fca, 0x00008fcd,
        0x00008fd3, 0x00008fd5, 0x00008fe0, 0x00008ff1, 0x00008ff5, 0x00008ffb, 0x00009002, 0x0000900c,
        0x00009037, 0x0002856b, 0x00009043, 0x00009044, 0x0000905d, 0x000285c8,
    ],
    [
        0x000285c9, 0x00009085, 0x0000908c, 0x00009090, 0x0000961d, 0x000090a1, 0x000048b5, 0x000090b0,
        0x000090b6, 0x000090c3, 0x000090c8, 0x000286d7, 0x000090dc, 0x000090df, 0x000286fa, 0x000090f6,
        0x000090f2, 0x00009100, 0x000090eb, 0x000090fe, 0x000090ff, 0x00009104, 0x00009106, 0x00009118,
        0x0000911c, 0x0000911e, 0x00009137, 0x00009139, 0x0000913a, 0x00009146, 0x00009147, 0x00009157,
        0x00009159, 0x00009161, 0x00009164, 0x00009174, 0x00009179, 0x00009185, 0x0000918e, 0x000091a8,
        0x000091ae, 0x000091b3, 0x000091b6, 0x000091c3, 0x000091c4, 0x000091da, 0x00028949, 0x00028946,
        0x000091ec, 0x000091ee, 0x00009201, 0x0000920a, 0x00009216, 0x00009217, 0x0002896b, 0x00009233,
        0x00009242, 0x00009247, 0x0000924a, 0x0000924e, 0x00009251, 0x00009256, 0x00009259, 0x00009260,
        0x00009261, 0x00009265, 0x00009267, 0x00009268, 0x00028987, 0x00028988, 0x0000927c, 0x0000927d,
        0x0000927f, 0x00009289, 0x0000928d, 0x00009297, 0x00009299, 0x0000929f, 0x000092a7, 0x000092ab,
        0x000289ba, 0x000289bb, 0x000092b2, 0x000092bf, 0x000092c0, 0x000092c6, 0x000092ce, 0x000092d0,
        0x000092d7, 0x000092d9, 0x000092e5, 0x000092e7, 0x00009311, 0x00028a1e,
    ],
    [
        0x00028a29, 0x000092f7, 0x000092f9, 0x000092fb, 0x00009302, 0x0000930d, 0x00009315, 0x0000931d,
        0x0000931e, 0x00009327, 0x00009329, 0x00028a71, 0x00028a43, 0x00009347, 0x00009351, 0x00009357,
        0x0000935a, 0x0000936b, 0x00009371, 0x00009373, 0x000093a1, 0x00028a99, 0x00028acd, 0x00009388,
        0x0000938b, 0x0000938f, 0x0000939e, 0x000093f5, 0x00028ae4, 0x00028add, 0x000093f1, 0x000093c1,
        0x000093c7, 0x000093dc, 0x000093e2, 0x000093e7, 0x00009409, 0x0000940f, 0x00009416, 0x00009417,
        0x000093fb, 0x00009432, 0x00009434, 0x0000943b, 0x00009445, 0x00028bc1, 0x00028bef, 0x0000946d,
        0x0000946f, 0x00009578, 0x00009579, 0x00009586, 0x0000958c, 0x0000958d, 0x00028d10, 0x000095ab,
        0x000095b4, 0x00028d71, 0x000095c8, 0x00028dfb, 0x00028e1f, 0x0000962c, 0x00009633, 0x00009634,
        0x00028e36, 0x0000963c, 0x00009641, 0x00009661, 0x00028e89, 0x00009682, 0x00028eeb, 0x0000969a,
        0x00028f32, 0x000049e7, 0x000096a9, 0x000096af, 0x000096b3, 0x000096ba, 0x000096bd, 0x000049fa,
        0x00028ff8, 0x000096d8, 0x000096da, 0x000096dd, 0x00004a04, 0x00009714, 0x00009723, 0x00004a29,
        0x00009736, 0x00009741, 0x00009747, 0x00009755, 0x00009757, 0x0000975b,
    ],
    [
        0x0000976a, 0x000292a0, 0x000292b1, 0x00009796, 0x0000979a, 0x0000979e, 0x000097a2, 0x000097b1,
        0x000097b2, 0x000097be, 0x000097cc, 0x000097d1, 0x000097d4, 0x000097d8, 0x000097d9, 0x000097e1,
        0x000097f1, 0x00009804, 0x0000980d, 0x0000980e, 0x00009814, 0x00009816, 0x00004abc, 0x00029490,
        0x00009823, 0x00009832, 0x00009833, 0x00009825, 0x00009847, 0x00009866, 0x000098ab, 0x000098ad,
        0x000098b0, 0x000295cf, 0x000098b7, 0x000098b8, 0x000098bb, 0x000098bc, 0x000098bf, 0x000098c2,
        0x000098c7, 0x000098cb, 0x000098e0, 0x0002967f, 0x000098e1, 0x000098e3, 0x000098e5, 0x000098ea,
        0x000098f0, 0x000098f1, 0x000098f3, 0x00009908, 0x00004b3b, 0x000296f0, 0x00009916, 0x00009917,
        0x00029719, 0x0000991a, 0x0000991b, 0x0000991c, 0x00029750, 0x00009931, 0x00009932, 0x00009933,
        0x0000993a, 0x0000993b, 0x0000993c, 0x00009940, 0x00009941, 0x00009946, 0x0000994d, 0x0000994e,
        0x0000995c, 0x0000995f, 0x00009960, 0x000099a3, 0x000099a6, 0x000099b9, 0x000099bd, 0x000099bf,
        0x000099c3, 0x000099c9, 0x000099d4, 0x000099d9, 0x000099de, 0x000298c6, 0x000099f0, 0x000099f9,
        0x000099fc, 0x00009a0a, 0x00009a11, 0x00009a16, 0x00009a1a, 0x00009a20,
    ],
    [
        0x00009a31, 0x00009a36, 0x00009a44, 0x00009a4c, 0x00009a58, 0x00004bc2, 0x00009aaf, 0x00004bca,
        0x00009ab7, 0x00004bd2, 0x00009ab9, 0x00029a72, 0x00009ac6, 0x00009ad0, 0x00009ad2, 0x00009ad5,
        0x00004be8, 0x00009adc, 0x00009ae0, 0x00009ae5, 0x00009ae9, 0x00009b03, 0x00009b0c, 0x00009b10,
        0x00009b12, 0x00009b16, 0x00009b1c, 0x00009b2b, 0x00009b33, 0x00009b3d, 0x00004c20, 0x00009b4b,
        0x00009b63, 0x00009b65, 0x00009b6b, 0x00009b6c, 0x00009b73, 0x00009b76, 0x00009b77, 0x00009ba6,
        0x00009bac, 0x00009bb1, 0x00029ddb, 0x00029e3d, 0x00009bb2, 0x00009bb8, 0x00009bbe, 0x00009bc7,
        0x00009bf3, 0x00009bd8, 0x00009bdd, 0x00009be7, 0x00009bea, 0x00009beb, 0x00009bef, 0x00009bee,
        0x00029e15, 0x00009bfa, 0x00029e8a, 0x00009bf7, 0x00029e49, 0x00009c16, 0x00009c18, 0x00009c19,
        0x00009c1a, 0x00009c1d, 0x00009c22, 0x00009c27, 0x00009c29, 0x00009c2a, 0x00029ec4, 0x00009c31,
        0x00009c36, 0x00009c37, 0x00009c45, 0x00009c5c, 0x00029ee9, 0x00009c49, 0x00009c4a, 0x00029edb,
        0x00009c54, 0x00009c58, 0x00009c5b, 0x00009c5d, 0x00009c5f, 0x00009c69, 0x00009c6a, 0x00009c6b,
        0x00009c6d, 0x00009c6e, 0x00009c70, 0x00009c72, 0x00009c75, 0x00009c7a,
    ],
    [
        0x00009ce6, 0x00009cf2, 0x00009d0b, 0x00009d02, 0x00029fce, 0x00009d11, 0x00009d17, 0x00009d18,
        0x0002a02f, 0x00004cc4, 0x0002a01a, 0x00009d32, 0x00004cd1, 0x00009d42, 0x00009d4a, 0x00009d5f,
        0x00009d62, 0x0002a0f9, 0x00009d69, 0x00009d6b, 0x0002a082, 0x00009d73, 0x00009d76, 0x00009d77,
        0x00009d7e, 0x00009d84, 0x00009d8d, 0x00009d99, 0x00009da1, 0x00009dbf, 0x00009db5, 0x00009db9,
        0x00009dbd, 0x00009dc3, 0x00009dc7, 0x00009dc9, 0x00009dd6, 0x00009dda, 0x00009ddf, 0x00009de0,
        0x00009de3, 0x00009df4, 0x00004d07, 0x00009e0a, 0x00009e02, 0x00009e0d, 0x00009e19, 0x00009e1c,
        0x00009e1d, 0x00009e7b, 0x00022218, 0x00009e80, 0x00009e85, 0x00009e9b, 0x00009ea8, 0x0002a38c,
        0x00009ebd, 0x0002a437, 0x00009edf, 0x00009ee7, 0x00009eee, 0x00009eff, 0x00009f02, 0x00004d77,
        0x00009f03, 0x00009f17, 0x00009f19, 0x00009f2f, 0x00009f37, 0x00009f3a, 0x00009f3d, 0x00009f41,
        0x00009f45, 0x00009f46, 0x00009f53, 0x00009f55, 0x00009f58, 0x0002a5f1, 0x00009f5d, 0x0002a602,
        0x00009f69, 0x0002a61a, 0x00009f6d, 0x00009f70, 0x00009f75, 0x0002a6b2, 0x00000000, 0x00000000,
        0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000, 0x00000000,
    ],
];
