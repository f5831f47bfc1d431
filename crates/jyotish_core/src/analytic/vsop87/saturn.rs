//! Saturn.

use super::{Series, Term};

const L0: [Term; 233] = [
    (0.87401354029, 0.0, 0.0),
    (0.1110765978, 3.96205090194, 213.299095438),
    (0.01414150958, 4.58581515873, 7.1135470008),
    (0.00398379386, 0.52112025957, 206.1855484372),
    (0.00350769223, 3.30329903015, 426.598190876),
    (0.00206816296, 0.24658366938, 103.0927742186),
    (0.00079271288, 3.8400707853, 220.4126424388),
    (0.00023990338, 4.6697693486, 110.2063212194),
    (0.00016573583, 0.43719123541, 419.4846438752),
    (0.00014906995, 5.76903283845, 316.3918696566),
    (0.000158203, 0.9380895376, 632.7837393132),
    (0.00014609562, 1.56518573691, 3.9321532631),
    (0.00013160308, 4.44891180176, 14.2270940016),
    (0.00015053509, 2.71670027883, 639.897286314),
    (0.00013005305, 5.98119067061, 11.0457002639),
    (0.00010725066, 3.12939596466, 202.2533951741),
    (0.00005863207, 0.23657028777, 529.6909650946),
    (0.00005227771, 4.2078316238, 3.1813937377),
    (0.00006126308, 1.76328499656, 277.0349937414),
    (0.00005019658, 3.17787919533, 433.7117378768),
    (0.00004592541, 0.61976424374, 199.0720014364),
    (0.00004005862, 2.24479893937, 63.7358983034),
    (0.00002953815, 0.98280385206, 95.9792272178),
    (0.00003873696, 3.22282692566, 138.5174968707),
    (0.00002461172, 2.03163631205, 735.8765135318),
    (0.0000326949, 0.77491895787, 949.1756089698),
    (0.00001758143, 3.26580514774, 522.5774180938),
    (0.00001640183, 5.50504966218, 846.0828347512),
    (0.00001391336, 4.02331978116, 323.5054166574),
    (0.00001580641, 4.3726631412, 309.2783226558),
    (0.00001123515, 2.83726793572, 415.5524906121),
    (0.00001017258, 3.71698151814, 227.5261894396),
    (0.00000848643, 3.19149825839, 209.3669421749),
    (0.00001087237, 4.18343232481, 2.4476805548),
    (0.00000956752, 0.50740889886, 1265.5674786264),
    (0.00000789205, 5.00745123149, 0.9632078465),
    (0.00000686965, 1.74714407827, 1052.2683831884),
    (0.0000065447, 1.59889331515, 0.0481841098),
    (0.00000748811, 2.14398149298, 853.196381752),
    (0.0000063398, 2.29889903023, 412.3710968744),
    (0.00000743584, 5.25276954625, 224.3447957019),
    (0.00000852677, 3.42141350697, 175.1660598002),
    (0.00000579857, 3.09259007048, 74.7815985673),
    (0.00000624904, 0.97046831256, 210.1177017003),
    (0.00000529861, 4.44938897119, 117.3198682202),
    (0.00000542643, 1.51824320514, 9.5612275556),
    (0.00000474279, 5.47527185987, 742.9900605326),
    (0.00000448542, 1.28990416161, 127.4717966068),
    (0.00000546358, 2.12678554211, 350.3321196004),
    (0.00000478054, 2.96488054338, 137.0330241624),
    (0.00000354944, 3.0128648303, 838.9692877504),
    (0.00000451827, 1.04436664241, 490.3340891794),
    (0.00000347413, 1.53928227764, 340.7708920448),
    (0.00000343475, 0.24604039134, 0.5212648618),
    (0.00000309001, 3.49486734909, 216.4804891757),
    (0.00000322185, 0.96137456104, 203.7378678824),
    (0.00000372308, 2.27819108625, 217.2312487011),
    (0.00000321543, 2.57182354537, 647.0108333148),
    (0.00000330196, 0.24715617844, 1581.959348283),
    (0.00000249116, 1.47010534421, 1368.660252845),
    (0.00000286688, 2.37043745859, 351.8165923087),
    (0.00000220225, 4.20422424873, 200.7689224658),
    (0.00000277775, 0.40020408926, 211.8146227297),
    (0.000002045, 6.010822066, 265.9892934775),
    (0.00000207663, 0.48349820488, 1162.4747044078),
    (0.00000208655, 1.34516255304, 625.6701923124),
    (0.00000182454, 5.49122292426, 2.9207613068),
    (0.00000226609, 4.91003163138, 12.5301729722),
    (0.00000207659, 1.283022189, 39.3568759152),
    (0.00000173914, 1.86305806814, 0.7507595254),
    (0.0000018469, 3.50344404958, 149.5631971346),
    (0.00000183511, 0.97254952728, 4.192785694),
    (0.00000146068, 6.23102544071, 195.1398481733),
    (0.00000164541, 0.4400551752, 5.4166259714),
    (0.00000147526, 1.53529320509, 5.6290742925),
    (0.00000139666, 4.29450260069, 21.3406410024),
    (0.00000131283, 4.06828961903, 10.2949407385),
    (0.00000117283, 2.67920400584, 1155.361157407),
    (0.00000149299, 5.73594349789, 52.6901980395),
    (0.00000122373, 1.97588777199, 4.665866446),
    (0.00000113747, 5.59427544714, 1059.3819301892),
    (0.00000102702, 1.19748124058, 1685.0521225016),
    (0.00000118156, 5.340729339, 554.0699874828),
    (0.00000109275, 3.43812715686, 536.8045120954),
    (0.00000110399, 0.1660402409, 1.4844727083),
    (0.00000124969, 6.27737805832, 1898.3512179396),
    (0.00000089949, 5.80392934702, 114.1384744825),
    (0.00000103956, 2.19210363069, 88.865680217),
    (0.00000112437, 1.10502663534, 191.2076949102),
    (0.0000010657, 4.01156608514, 956.2891559706),
    (0.0000009143, 1.8752157751, 38.1330356378),
    (0.00000083791, 5.48810655641, 0.1118745846),
    (0.00000083461, 2.28972767279, 628.8515860501),
    (0.00000096987, 4.53666595763, 302.164775655),
    (0.00000100631, 4.96513666539, 269.9214467406),
    (0.00000075491, 2.18045274099, 728.762966531),
    (0.0000009633, 2.8331918921, 275.5505210331),
    (0.00000082363, 3.05469876064, 440.8252848776),
    (0.00000073888, 5.08914205084, 1375.7737998458),
    (0.00000071633, 5.1094074343, 65.2203710117),
    (0.00000070409, 4.86846451411, 0.2124483211),
    (0.0000006976, 3.71029022489, 14.977853527),
    (0.00000088772, 3.86334563977, 278.5194664497),
    (0.0000006809, 0.7341546099, 1478.8665740644),
    (0.00000066501, 0.02677580336, 70.8494453042),
    (0.00000065682, 2.02165559602, 142.4496501338),
    (0.00000075765, 1.61410487792, 284.1485407422),
    (0.00000063153, 3.49493353034, 479.2883889155),
    (0.00000062539, 2.58713611532, 422.6660376129),
    (0.00000069313, 3.43979731402, 515.463871093),
    (0.00000079021, 4.45154941586, 35.4247226521),
    (0.00000063664, 3.31749528708, 62.2514255951),
    (0.00000052939, 5.51392725227, 0.2606324309),
    (0.00000053011, 3.18480701697, 8.0767548473),
    (0.00000054492, 2.45674090515, 22.0914005278),
    (0.00000050514, 4.26749346978, 99.1606209555),
    (0.0000005517, 0.9679744615, 942.062061969),
    (0.00000049288, 2.38641424063, 1471.7530270636),
    (0.00000047199, 2.02515248245, 312.1990839626),
    (0.0000006108, 1.50295092063, 210.8514148832),
    (0.00000045126, 0.93109376473, 2001.4439921582),
    (0.00000060556, 2.68715551585, 388.4651552382),
    (0.00000043452, 2.52602011714, 288.0806940053),
    (0.00000042544, 3.81793980322, 330.6189636582),
    (0.00000039915, 5.713786529, 408.4389436113),
    (0.00000050145, 6.03164759907, 2214.7430875962),
    (0.0000004586, 0.54229721801, 212.3358875915),
    (0.00000054165, 0.78154835399, 191.9584544356),
    (0.00000047016, 4.59934671151, 437.6438911399),
    (0.00000042362, 1.90070070955, 430.5303441391),
    (0.00000039722, 1.63259419913, 1066.49547719),
    (0.00000036345, 0.84756992711, 213.3472795478),
    (0.00000035468, 4.18603772925, 215.7467759928),
    (0.00000036344, 3.93295730315, 213.2509113282),
    (0.00000038005, 0.31313803095, 423.4167971383),
    (0.00000044746, 1.12488341174, 6.1503391543),
    (0.00000037902, 1.19795851115, 2.7083129857),
    (0.00000043402, 1.37363944007, 563.6312150384),
    (0.00000043764, 3.93043802956, 525.4981794006),
    (0.00000034825, 1.01566605408, 203.0041546995),
    (0.00000031755, 1.69273634405, 0.1600586944),
    (0.0000003088, 6.13525703832, 417.0369633204),
    (0.00000036388, 6.00586032647, 18.1592472647),
    (0.00000029032, 1.19660544505, 404.5067903482),
    (0.00000032812, 0.53649479713, 107.0249274817),
    (0.00000030433, 0.72335287989, 222.8603229936),
    (0.00000032644, 0.81204701486, 1795.258443721),
    (0.00000037769, 3.69666903716, 1272.6810256272),
    (0.00000027679, 1.45663979401, 7.1617311106),
    (0.00000027187, 1.89731951902, 1045.1548361876),
    (0.00000037699, 4.51997049537, 24.3790223882),
    (0.00000034885, 4.46095761791, 214.2623032845),
    (0.0000003265, 0.66372395761, 692.5874843535),
    (0.00000030324, 5.30369950147, 33.9402499438),
    (0.0000002748, 6.22702216249, 1.2720243872),
    (0.00000026657, 4.56713198392, 7.065362891),
    (0.00000031745, 5.49798599565, 56.6223513026),
    (0.0000002805, 5.64447420566, 128.9562693151),
    (0.00000024277, 3.93966553574, 414.0680179038),
    (0.00000032017, 5.22260660455, 92.0470739547),
    (0.00000026976, 0.06705123981, 205.2223405907),
    (0.00000022974, 3.6581775177, 207.6700211455),
    (0.00000031775, 5.59198119173, 6069.7767545534),
    (0.00000023153, 2.10054506119, 1788.1448967202),
    (0.00000031025, 0.37190053329, 703.6331846174),
    (0.00000029376, 0.14742155778, 131.4039498699),
    (0.00000022562, 5.24009182383, 212.7778305762),
    (0.00000026185, 5.41311252822, 140.001969579),
    (0.00000025673, 4.36038885283, 32.2433289144),
    (0.00000020392, 2.8241390926, 429.7795846137),
    (0.00000020659, 0.67091805084, 2317.8358618148),
    (0.00000024397, 3.08740396398, 145.6310438715),
    (0.00000023735, 2.54365387567, 76.2660712756),
    (0.00000020157, 5.06708675157, 617.8058857862),
    (0.00000023307, 3.97357729211, 483.2205421786),
    (0.00000022878, 6.10452832642, 177.8743727859),
    (0.00000022978, 3.20140795404, 208.633228992),
    (0.00000020638, 5.22128727027, 6.592282139),
    (0.00000021446, 0.72034565528, 1258.4539316256),
    (0.00000018034, 6.11382719947, 210.3783341312),
    (0.0000002238, 5.92299908546, 173.9422195228),
    (0.00000019128, 5.77772013766, 213.8203602998),
    (0.00000020871, 5.79126331864, 2531.1349572528),
    (0.00000019327, 1.64147367403, 565.1156877467),
    (0.00000016806, 3.27953583323, 98.8999885246),
    (0.00000020833, 2.01655935909, 860.3099287528),
    (0.00000017939, 3.14329498012, 831.8557407496),
    (0.00000015653, 3.10137669623, 106.2741679563),
    (0.00000018235, 5.22595172482, 73.297125859),
    (0.00000019302, 5.9394711405, 425.1137181677),
    (0.00000014514, 2.75049388379, 1.2238402774),
    (0.00000014562, 5.18795088579, 305.3461693927),
    (0.00000014254, 3.88079504939, 54.1746707478),
    (0.00000014594, 3.25016810034, 78.7137518304),
    (0.00000013637, 2.55486219141, 405.2575498736),
    (0.00000013914, 1.72356993808, 69.1525242748),
    (0.00000013689, 2.37430586272, 125.9873238985),
    (0.00000013496, 0.82683590985, 99.9113804809),
    (0.00000018483, 0.73171264866, 9999.986450773),
    (0.00000013542, 3.58584380924, 234.6397364404),
    (0.00000013741, 6.18458356845, 245.5424243524),
    (0.00000016944, 0.72200792996, 2111.6503133776),
    (0.00000017441, 0.23803796878, 134.5853436076),
    (0.00000014181, 4.51963935804, 59.8037450403),
    (0.00000013598, 2.53776983965, 1.6969210294),
    (0.0000001224, 2.11973445754, 28.3111756513),
    (0.00000011988, 1.62114832786, 1361.5467058442),
    (0.00000011974, 4.0737873512, 280.9671470045),
    (0.00000012758, 5.31146919749, 344.7030453079),
    (0.00000016051, 3.97093160336, 355.7487455718),
    (0.00000011427, 5.51123470805, 192.6921676185),
    (0.00000013133, 4.69168003518, 767.3690829208),
    (0.00000014746, 3.28998910617, 1589.0728952838),
    (0.00000011417, 1.81615681635, 2104.5367663768),
    (0.00000011626, 2.79410384978, 362.8622925726),
    (0.00000013234, 4.16642914717, 225.8292684102),
    (0.00000010599, 5.50554288376, 199.2844497575),
    (0.00000010558, 3.57501718639, 1.4362885985),
    (0.00000010485, 2.84462532686, 85.8272988312),
    (0.00000010296, 0.22225264071, 198.321241911),
    (0.00000010552, 0.18716643576, 217.491881132),
    (0.00000011853, 0.11584857323, 7.6348118626),
    (0.00000010248, 0.2190415417, 144.1465711632),
    (0.00000010403, 1.68776321208, 31.019488637),
    (0.00000010313, 4.72132701805, 216.2198567448),
    (0.00000010719, 2.60869377832, 339.2864193365),
    (0.00000013212, 6.00683506785, 214.7835681463),
    (0.00000011346, 2.61898383052, 7.8643065262),
    (0.00000011882, 4.00188476744, 267.4737661858),
    (0.00000012054, 3.59904816676, 124.433415221),
    (0.00000010142, 3.60807025662, 14.0146456805),
    (0.00000010529, 2.36779614951, 831.1049812242),
    (0.00000010142, 3.93620624488, 207.8824694666),
];

const L1: [Term; 57] = [
    (213.54295595986, 0.0, 0.0),
    (0.01296855005, 1.82820544701, 213.299095438),
    (0.00564347566, 2.88500136429, 7.1135470008),
    (0.0009832303, 1.08070061328, 426.598190876),
    (0.0010767877, 2.27769911872, 206.1855484372),
    (0.00040254586, 2.0412825709, 220.4126424388),
    (0.00019941734, 1.27954662736, 103.0927742186),
    (0.00010511706, 2.748803928, 14.2270940016),
    (0.00006939233, 0.40493079985, 639.897286314),
    (0.00004803325, 2.44194097666, 419.4846438752),
    (0.00004056325, 2.92166618776, 110.2063212194),
    (0.0000376863, 3.6496563146, 3.9321532631),
    (0.00003384684, 2.41694251653, 3.1813937377),
    (0.000033022, 1.26256486715, 433.7117378768),
    (0.00003071382, 2.3273931775, 199.0720014364),
    (0.00001953036, 3.563946833, 11.0457002639),
    (0.00001249348, 2.62803737519, 95.9792272178),
    (0.00000921683, 1.9608983425, 227.5261894396),
    (0.00000705587, 4.4168924933, 529.6909650946),
    (0.00000649654, 6.17418093659, 202.2533951741),
    (0.00000627603, 6.11088227167, 309.2783226558),
    (0.00000486843, 6.03998200305, 853.196381752),
    (0.00000468377, 4.61707843907, 63.7358983034),
    (0.00000478501, 4.98776987984, 522.5774180938),
    (0.0000041701, 2.11708169277, 323.5054166574),
    (0.0000040763, 1.29949556676, 209.3669421749),
    (0.00000343826, 3.95854178574, 412.3710968744),
    (0.00000339724, 3.63396398752, 316.3918696566),
    (0.00000335936, 3.77173072712, 735.8765135318),
    (0.00000331933, 2.86077699882, 210.1177017003),
    (0.00000352489, 2.31707079463, 632.7837393132),
    (0.00000289429, 2.73263080235, 117.3198682202),
    (0.00000265801, 0.54344631312, 647.0108333148),
    (0.00000230493, 1.64428879621, 216.4804891757),
    (0.00000280911, 5.74398845416, 2.4476805548),
    (0.00000191667, 2.96512946582, 224.3447957019),
    (0.00000172891, 4.07695221044, 846.0828347512),
    (0.00000167131, 2.59745202658, 21.3406410024),
    (0.00000136328, 2.28580246629, 10.2949407385),
    (0.00000131364, 3.44108355646, 742.9900605326),
    (0.00000127838, 4.09533471247, 217.2312487011),
    (0.00000108862, 6.16141072262, 415.5524906121),
    (0.00000093909, 3.48397279899, 1052.2683831884),
    (0.00000092482, 3.94755499926, 88.865680217),
    (0.00000097584, 4.72845436677, 838.9692877504),
    (0.000000866, 1.21951325061, 440.8252848776),
    (0.00000083463, 3.11269504725, 625.6701923124),
    (0.00000077588, 6.24408938835, 302.164775655),
    (0.00000061557, 1.82789612597, 195.1398481733),
    (0.000000619, 4.29344363385, 127.4717966068),
    (0.00000067106, 0.28961738595, 4.665866446),
    (0.00000056919, 5.01889578112, 137.0330241624),
    (0.0000005416, 5.12628572382, 490.3340891794),
    (0.00000054585, 0.28356341456, 74.7815985673),
    (0.00000051425, 1.45766406064, 536.8045120954),
    (0.00000065843, 5.64757042732, 9.5612275556),
    (0.0000005778, 2.47630552035, 191.9584544356),
];

const L2: [Term; 17] = [
    (0.00116441181, 1.17987850633, 7.1135470008),
    (0.00091920844, 0.07425261094, 213.299095438),
    (0.00090592251, 0.0, 0.0),
    (0.00015276909, 4.06492007503, 206.1855484372),
    (0.00010631396, 0.25778277414, 220.4126424388),
    (0.00010604979, 5.40963595885, 426.598190876),
    (0.00004265368, 1.0459555663, 14.2270940016),
    (0.00001215527, 2.91860042123, 103.0927742186),
    (0.00001164684, 4.60942128971, 639.897286314),
    (0.00001081967, 5.6913035167, 433.7117378768),
    (0.00001020079, 0.63369182642, 3.1813937377),
    (0.00001044754, 4.04206453611, 199.0720014364),
    (0.00000633582, 4.38825410036, 419.4846438752),
    (0.00000549329, 5.57303134242, 3.9321532631),
    (0.00000456914, 1.26840971349, 110.2063212194),
    (0.000004251, 0.20935499279, 227.5261894396),
    (0.00000273739, 4.28841011784, 95.9792272178),
];

const L3: [Term; 4] = [
    (0.00016038734, 5.73945377424, 7.1135470008),
    (0.00004249793, 4.58539675603, 213.299095438),
    (0.00001906524, 4.76082050205, 220.4126424388),
    (0.00001465687, 5.91326678323, 206.1855484372),
];

const B0: [Term; 79] = [
    (0.0433067804, 3.60284428399, 213.299095438),
    (0.00240348303, 2.8523848939, 426.598190876),
    (0.00084745939, 0.0, 0.0),
    (0.00030863357, 3.48441504465, 220.4126424388),
    (0.00034116063, 0.57297307844, 206.1855484372),
    (0.0001473407, 2.1184659787, 639.897286314),
    (0.00009916668, 5.79003189405, 419.4846438752),
    (0.00006993564, 4.73604689179, 7.1135470008),
    (0.00004807587, 5.43305315602, 316.3918696566),
    (0.00004788392, 4.9651292742, 110.2063212194),
    (0.00003432125, 2.73255752123, 433.7117378768),
    (0.00001506129, 6.01304536144, 103.0927742186),
    (0.00001060298, 5.63099292414, 529.6909650946),
    (0.00000969071, 5.20434966103, 632.7837393132),
    (0.0000094205, 1.39646678088, 853.196381752),
    (0.00000707645, 3.80302329547, 323.5054166574),
    (0.00000552313, 5.13149109045, 202.2533951741),
    (0.00000399675, 3.35891413961, 227.5261894396),
    (0.00000316063, 1.99716764199, 647.0108333148),
    (0.0000031938, 3.6257155098, 209.3669421749),
    (0.00000284494, 4.88648481625, 224.3447957019),
    (0.00000314225, 0.4651027241, 217.2312487011),
    (0.00000236442, 2.13887472281, 11.0457002639),
    (0.00000215354, 5.94982610103, 846.0828347512),
    (0.00000208522, 2.12003893769, 415.5524906121),
    (0.00000178958, 2.95361514672, 63.7358983034),
    (0.00000207213, 0.73021462851, 199.0720014364),
    (0.0000013914, 1.9982199094, 735.8765135318),
    (0.00000134884, 5.24500819605, 742.9900605326),
    (0.00000140585, 0.64417620299, 490.3340891794),
    (0.00000121669, 3.11537140876, 522.5774180938),
    (0.0000013924, 4.59535168021, 14.2270940016),
    (0.00000115524, 3.10891547171, 216.4804891757),
    (0.00000114218, 0.96261442133, 210.1177017003),
    (0.00000096376, 4.48164339766, 117.3198682202),
    (0.00000080593, 1.3169275015, 277.0349937414),
    (0.00000072952, 3.0598848237, 536.8045120954),
    (0.00000069261, 4.92378633635, 309.2783226558),
    (0.00000074302, 2.8937653962, 149.5631971346),
    (0.0000006804, 2.18002263974, 351.8165923087),
    (0.00000061734, 0.67728106562, 1066.49547719),
    (0.00000056598, 2.60963391288, 440.8252848776),
    (0.00000048864, 5.78725874107, 95.9792272178),
    (0.00000048243, 2.1821183743, 74.7815985673),
    (0.00000038304, 5.29151303843, 1059.3819301892),
    (0.00000036323, 1.63348365121, 628.8515860501),
    (0.00000035055, 1.71279210041, 1052.2683831884),
    (0.0000003427, 2.45740470599, 422.6660376129),
    (0.00000034313, 5.97994514798, 412.3710968744),
    (0.00000033787, 1.14073392951, 949.1756089698),
    (0.00000031633, 4.14722153007, 437.6438911399),
    (0.00000036833, 6.27769966148, 1162.4747044078),
    (0.0000002698, 1.2715481681, 860.3099287528),
    (0.00000023516, 2.74936525342, 838.9692877504),
    (0.0000002346, 0.98962849901, 210.8514148832),
    (0.000000236, 4.11386961467, 3.9321532631),
    (0.00000023631, 3.07427204313, 215.7467759928),
    (0.00000020813, 3.51084686918, 330.6189636582),
    (0.00000019509, 2.81857577372, 127.4717966068),
    (0.00000017103, 3.89784279922, 214.2623032845),
    (0.00000017635, 6.19715516746, 703.6331846174),
    (0.00000017824, 2.28524493886, 388.4651552382),
    (0.00000020935, 0.14356167048, 430.5303441391),
    (0.00000016551, 1.66649120724, 38.1330356378),
    (0.000000191, 2.97699096081, 137.0330241624),
    (0.00000015517, 4.54798410406, 956.2891559706),
    (0.00000017065, 0.16611115812, 212.3358875915),
    (0.00000014169, 0.48937283445, 213.3472795478),
    (0.00000019027, 6.27326062836, 423.4167971383),
    (0.00000013344, 2.37136126257, 429.7795846137),
    (0.00000012565, 1.03178071173, 563.6312150384),
    (0.00000014173, 3.57477564831, 213.2509113282),
    (0.00000011374, 1.45300927024, 1368.660252845),
    (0.00000010585, 6.1763342593, 200.7689224658),
    (0.000000106, 3.84358958373, 138.5174968707),
    (0.00000010263, 2.17423692422, 76.2660712756),
    (0.00000010072, 1.33197220789, 565.1156877467),
    (0.00000012058, 0.441492427, 222.8603229936),
    (0.00000010367, 1.85278552549, 350.3321196004),
];

const B1: [Term; 24] = [
    (0.00397554998, 5.33289992556, 213.299095438),
    (0.00018571607, 6.09919206378, 426.598190876),
    (0.00014800587, 2.3058606052, 206.1855484372),
    (0.00009643981, 1.6967466012, 220.4126424388),
    (0.00003757161, 1.25429514018, 419.4846438752),
    (0.00002716647, 5.91166664787, 639.897286314),
    (0.00001455309, 0.85161616532, 433.7117378768),
    (0.00001290595, 2.9177085709, 7.1135470008),
    (0.0000085263, 0.43572078997, 316.3918696566),
    (0.00000284386, 1.61881754773, 227.5261894396),
    (0.00000292185, 5.3157425127, 853.196381752),
    (0.0000027509, 3.88864137336, 103.0927742186),
    (0.00000297726, 0.91909206723, 632.7837393132),
    (0.00000172359, 0.05215146556, 647.0108333148),
    (0.00000127731, 1.20711452525, 529.6909650946),
    (0.00000166237, 2.44351613165, 199.0720014364),
    (0.0000015822, 5.20850125766, 110.2063212194),
    (0.00000109839, 2.45695551627, 217.2312487011),
    (0.00000081759, 2.75839171353, 210.1177017003),
    (0.0000008101, 2.86038377187, 14.2270940016),
    (0.00000068658, 1.65537623146, 202.2533951741),
    (0.00000059281, 1.82410768234, 323.5054166574),
    (0.00000065161, 1.25527521313, 216.4804891757),
    (0.00000061024, 1.25273412095, 209.3669421749),
];

const B2: [Term; 7] = [
    (0.00020629977, 0.50482422817, 213.299095438),
    (0.00003719555, 3.99833475829, 206.1855484372),
    (0.00001627158, 6.181899395, 220.4126424388),
    (0.00001346067, 0.0, 0.0),
    (0.00000705842, 3.03914308836, 419.4846438752),
    (0.00000365042, 5.09928680706, 426.598190876),
    (0.00000329632, 5.27899210039, 433.7117378768),
];

const R0: [Term; 150] = [
    (9.55758135801, 0.0, 0.0),
    (0.52921382465, 2.39226219733, 213.299095438),
    (0.01873679934, 5.23549605091, 206.1855484372),
    (0.01464663959, 1.64763045468, 426.598190876),
    (0.00821891059, 5.93520025371, 316.3918696566),
    (0.00547506899, 5.01532628454, 103.0927742186),
    (0.00371684449, 2.27114833428, 220.4126424388),
    (0.00361778433, 3.13904303264, 7.1135470008),
    (0.00140617548, 5.70406652991, 632.7837393132),
    (0.00108974737, 3.29313595577, 110.2063212194),
    (0.00069007015, 5.94099622447, 419.4846438752),
    (0.0006105335, 0.94037761156, 639.897286314),
    (0.00048913044, 1.55733388472, 202.2533951741),
    (0.00034143794, 0.19518550682, 277.0349937414),
    (0.00032401718, 5.47084606947, 949.1756089698),
    (0.00020936573, 0.46349163993, 735.8765135318),
    (0.00020839118, 1.5210259064, 433.7117378768),
    (0.00020746678, 5.33255667599, 199.0720014364),
    (0.00015298457, 3.05943652881, 529.6909650946),
    (0.00014296479, 2.60433537909, 323.5054166574),
    (0.00011993314, 5.98051421881, 846.0828347512),
    (0.00011380261, 1.73105746566, 522.5774180938),
    (0.00012884128, 1.64892310393, 138.5174968707),
    (0.00007752769, 5.85191318903, 95.9792272178),
    (0.00009796061, 5.20475863996, 1265.5674786264),
    (0.00006465967, 0.17733160145, 1052.2683831884),
    (0.00006770621, 3.00433479284, 14.2270940016),
    (0.00005850443, 1.45519636076, 415.5524906121),
    (0.00005307481, 0.5973753405, 63.7358983034),
    (0.00004695746, 2.14919036956, 227.5261894396),
    (0.00004043988, 1.64010323863, 209.3669421749),
    (0.00003688132, 0.7801613317, 412.3710968744),
    (0.00003376457, 3.69528478828, 224.3447957019),
    (0.00002885348, 1.38764077631, 838.9692877504),
    (0.00002976033, 5.68467931117, 210.1177017003),
    (0.00003419551, 4.94549148887, 1581.959348283),
    (0.00003460943, 1.85088802878, 175.1660598002),
    (0.00003400616, 0.55386747515, 350.3321196004),
    (0.0000250763, 3.53851863255, 742.9900605326),
    (0.00002448325, 6.18412386316, 1368.660252845),
    (0.00002406138, 2.96559220267, 117.3198682202),
    (0.00002881181, 0.17960757891, 853.196381752),
    (0.00002173959, 0.01508587396, 340.7708920448),
    (0.00002024483, 5.05411271271, 11.0457002639),
    (0.00001740254, 2.34657043464, 309.2783226558),
    (0.00001861397, 5.93361638244, 625.6701923124),
    (0.00001888436, 0.02968443389, 3.9321532631),
    (0.00001610859, 1.17302463549, 74.7815985673),
    (0.00001462631, 1.92588134017, 216.4804891757),
    (0.00001474547, 5.6767046113, 203.7378678824),
    (0.00001395109, 5.93669404929, 127.4717966068),
    (0.00001781165, 0.76314388077, 217.2312487011),
    (0.00001817186, 5.77713225779, 490.3340891794),
    (0.00001472392, 1.40064915651, 137.0330241624),
    (0.00001304089, 0.77235613966, 647.0108333148),
    (0.00001149773, 5.74021249703, 1162.4747044078),
    (0.00001126667, 4.46707803791, 265.9892934775),
    (0.00001277489, 2.98412586423, 1059.3819301892),
    (0.00001207053, 0.7528593316, 351.8165923087),
    (0.00001071399, 1.13567265104, 1155.361157407),
    (0.00001020922, 5.91233512844, 1685.0521225016),
    (0.00001315042, 5.11202572637, 211.8146227297),
    (0.00001295553, 4.69184139933, 1898.3512179396),
    (0.00001099037, 1.81765118601, 149.5631971346),
    (0.00000998462, 2.63131596867, 200.7689224658),
    (0.00000985869, 2.25992849742, 956.2891559706),
    (0.00000932434, 3.66980793184, 554.0699874828),
    (0.00000664481, 0.60297724821, 728.762966531),
    (0.0000065985, 4.66635439533, 195.1398481733),
    (0.0000061774, 5.62092000007, 942.062061969),
    (0.00000626382, 5.9420823259, 1478.8665740644),
    (0.0000048223, 1.84070179496, 479.2883889155),
    (0.00000487689, 2.79373616806, 3.1813937377),
    (0.00000470086, 0.8384775504, 1471.7530270636),
    (0.00000451817, 5.64468459871, 2001.4439921582),
    (0.00000553128, 3.41088600844, 269.9214467406),
    (0.00000534397, 1.26443331367, 275.5505210331),
    (0.00000472572, 1.8819858466, 515.463871093),
    (0.00000405434, 1.64001413521, 536.8045120954),
    (0.00000517196, 4.44310450526, 2214.7430875962),
    (0.00000452848, 3.00349117198, 302.164775655),
    (0.0000049434, 2.28626675074, 278.5194664497),
    (0.00000489825, 5.80631420383, 191.2076949102),
    (0.00000427459, 0.05741344372, 284.1485407422),
    (0.00000339763, 1.40198657693, 440.8252848776),
    (0.00000340627, 0.89091104306, 628.8515860501),
    (0.00000385974, 1.99700402508, 1272.6810256272),
    (0.00000288298, 1.12160250272, 422.6660376129),
    (0.00000294444, 0.42577061903, 312.1990839626),
    (0.0000026249, 0.31753439818, 1045.1548361876),
    (0.00000295331, 0.67144493789, 88.865680217),
    (0.00000342968, 5.85600322299, 1795.258443721),
    (0.00000341117, 2.3758524725, 525.4981794006),
    (0.00000234018, 4.22756813216, 114.1384744825),
    (0.00000223729, 2.28129446763, 330.6189636582),
    (0.00000275814, 0.47832439352, 38.1330356378),
    (0.00000224592, 0.54754005675, 1788.1448967202),
    (0.000003033, 0.87946670205, 6069.7767545534),
    (0.00000292103, 6.2142061192, 210.8514148832),
    (0.00000226121, 0.37495223398, 142.4496501338),
    (0.00000277257, 5.31917702012, 692.5874843535),
    (0.00000242911, 5.37187983246, 1258.4539316256),
    (0.00000205571, 0.95755250527, 288.0806940053),
    (0.00000207567, 5.38126259725, 2317.8358618148),
    (0.00000186835, 6.03591766061, 404.5067903482),
    (0.00000218536, 5.25607043545, 212.3358875915),
    (0.00000222155, 5.94588016768, 39.3568759152),
    (0.00000179673, 4.41045924362, 408.4389436113),
    (0.0000024144, 1.1252586811, 388.4651552382),
    (0.00000197093, 3.9014194285, 52.6901980395),
    (0.00000236639, 0.90802744873, 1375.7737998458),
    (0.00000171915, 5.56318632797, 213.3472795478),
    (0.00000169865, 2.8566755401, 99.1606209555),
    (0.00000214398, 4.20253525974, 2531.1349572528),
    (0.0000017201, 2.36537801012, 213.2509113282),
    (0.00000165707, 2.63679789706, 215.7467759928),
    (0.00000230892, 5.49463421262, 191.9584544356),
    (0.00000177585, 0.38155817719, 430.5303441391),
    (0.00000191514, 2.95906900704, 437.6438911399),
    (0.0000016325, 3.4583251728, 617.8058857862),
    (0.00000162305, 5.73050678664, 203.0041546995),
    (0.00000175108, 5.71404465044, 1066.49547719),
    (0.00000183041, 5.66851947172, 2111.6503133776),
    (0.00000150077, 4.40663921925, 417.0369633204),
    (0.00000187935, 6.07916265661, 563.6312150384),
    (0.00000145127, 5.08176368814, 423.4167971383),
    (0.00000137491, 5.43912787991, 222.8603229936),
    (0.00000172824, 1.8492099409, 1589.0728952838),
    (0.00000165478, 2.89132196119, 214.2623032845),
    (0.00000145727, 1.56565192483, 831.8557407496),
    (0.00000176864, 2.30323752987, 9999.986450773),
    (0.00000128877, 2.55338644107, 414.0680179038),
    (0.00000120093, 0.04329750542, 1361.5467058442),
    (0.00000143441, 0.9981735772, 76.2660712756),
    (0.00000108747, 2.09282278191, 207.6700211455),
    (0.00000132106, 2.85902597898, 312.4597163935),
    (0.00000112238, 0.26221759151, 2104.5367663768),
    (0.00000125186, 4.78354048063, 205.2223405907),
    (0.00000104427, 3.63671899047, 65.2203710117),
    (0.00000107447, 3.67064138701, 212.7778305762),
    (0.00000108642, 2.85492389024, 21.3406410024),
    (0.00000097743, 5.12231845599, 2634.2277314714),
    (0.00000109097, 1.63231061493, 208.633228992),
    (0.00000096852, 4.19928280035, 305.3461693927),
    (0.00000096507, 2.56002066845, 1692.1656695024),
    (0.00000099249, 5.13816222131, 1574.8458012822),
    (0.00000112532, 5.03109281265, 703.6331846174),
    (0.00000110191, 2.43656081234, 355.7487455718),
    (0.00000095885, 5.44594259071, 2428.0421830342),
    (0.00000096584, 4.84438390997, 131.4039498699),
];

const R1: [Term; 37] = [
    (0.06182981282, 0.25843515034, 213.299095438),
    (0.00506577574, 0.71114650941, 206.1855484372),
    (0.00341394136, 5.7963577396, 426.598190876),
    (0.00188491375, 0.47215719444, 220.4126424388),
    (0.00143891176, 1.40744864239, 7.1135470008),
    (0.00049621111, 6.0174446958, 103.0927742186),
    (0.00020928189, 5.0924565447, 639.897286314),
    (0.00019952612, 1.17560125007, 419.4846438752),
    (0.00018839639, 1.60819563173, 110.2063212194),
    (0.00012892827, 5.94330258435, 433.7117378768),
    (0.00013876565, 0.75886204364, 199.0720014364),
    (0.00005396699, 1.28852405908, 14.2270940016),
    (0.00004869308, 0.86793894213, 323.5054166574),
    (0.00004247455, 0.39299384543, 227.5261894396),
    (0.00003252084, 1.25853470491, 95.9792272178),
    (0.00002856006, 2.16731405366, 735.8765135318),
    (0.00002909411, 4.60679154788, 202.2533951741),
    (0.00003081408, 3.43662557418, 522.5774180938),
    (0.00001987689, 2.45054204795, 412.3710968744),
    (0.00001941309, 6.02393385142, 209.3669421749),
    (0.00001581446, 1.29191789712, 210.1177017003),
    (0.00001339511, 4.30801821806, 853.196381752),
    (0.0000131559, 1.25296446023, 117.3198682202),
    (0.00001203085, 1.86654673794, 316.3918696566),
    (0.00001091088, 0.07527246854, 216.4804891757),
    (0.00000954403, 5.15173410519, 647.0108333148),
    (0.00000966012, 0.47991379141, 632.7837393132),
    (0.00000881827, 1.88471724478, 1052.2683831884),
    (0.00000874215, 1.40224683864, 224.3447957019),
    (0.00000897512, 0.98343776092, 529.6909650946),
    (0.00000784866, 3.06377517461, 838.9692877504),
    (0.00000739892, 1.38225356694, 625.6701923124),
    (0.00000612961, 3.03307306767, 63.7358983034),
    (0.0000065821, 4.1436293098, 309.2783226558),
    (0.000006496, 1.7248948616, 742.9900605326),
    (0.00000599236, 2.54924174765, 217.2312487011),
    (0.00000502886, 2.12958819475, 3.9321532631),
];

const R2: [Term; 10] = [
    (0.00436902464, 4.78671673044, 213.299095438),
    (0.0007192276, 2.50069994874, 206.1855484372),
    (0.00049766792, 4.9716815087, 220.4126424388),
    (0.00043220894, 3.86940443794, 426.598190876),
    (0.00029645554, 5.96310264282, 7.1135470008),
    (0.0000414165, 4.10670940823, 433.7117378768),
    (0.00004720909, 2.47527992423, 199.0720014364),
    (0.0000378937, 3.09771025067, 639.897286314),
    (0.0000296399, 1.37206248846, 103.0927742186),
    (0.00002556363, 2.85065721526, 419.4846438752),
];

const R3: [Term; 1] = [
    (0.00020315005, 3.02186626038, 213.299095438),
];

pub(crate) const SATURN: Series = Series {
    longitude: &[&L0, &L1, &L2, &L3],
    latitude: &[&B0, &B1, &B2],
    radius: &[&R0, &R1, &R2, &R3],
};
