//! Jupiter.

use super::{Series, Term};

const L0: [Term; 159] = [
    (0.59954691495, 0.0, 0.0),
    (0.09695898711, 5.06191793105, 529.6909650946),
    (0.00573610145, 1.44406205976, 7.1135470008),
    (0.0030638918, 5.41734729976, 1059.3819301892),
    (0.0009717828, 4.14264708819, 632.7837393132),
    (0.00072903096, 3.64042909255, 522.5774180938),
    (0.00064263986, 3.41145185203, 103.0927742186),
    (0.00039806051, 2.29376744855, 419.4846438752),
    (0.0003885778, 1.2723172486, 316.3918696566),
    (0.00027964622, 1.78454589485, 536.8045120954),
    (0.00013589738, 5.7748103159, 1589.0728952838),
    (0.00008246362, 3.58227961655, 206.1855484372),
    (0.00008768686, 3.63000324417, 949.1756089698),
    (0.00007368057, 5.08101125612, 735.8765135318),
    (0.00006263171, 0.02497643742, 213.299095438),
    (0.0000611405, 4.51319531666, 1162.4747044078),
    (0.00004905419, 1.32084631684, 110.2063212194),
    (0.00005305283, 1.30671236848, 14.2270940016),
    (0.00005305457, 4.18625053495, 1052.2683831884),
    (0.00004647249, 4.69958109497, 3.9321532631),
    (0.00003045009, 4.31675960318, 426.598190876),
    (0.00002610001, 1.5666759485, 846.0828347512),
    (0.00002028191, 1.06376547379, 3.1813937377),
    (0.00001764768, 2.14148077766, 1066.49547719),
    (0.00001722983, 3.88036008872, 1265.5674786264),
    (0.00001920959, 0.97168928755, 639.897286314),
    (0.00001633217, 3.58201089758, 515.463871093),
    (0.00001431997, 4.29683690269, 625.6701923124),
    (0.00000973278, 4.09764957065, 95.9792272178),
    (0.00000884439, 2.43701426123, 412.3710968744),
    (0.00000732875, 6.08534113239, 838.9692877504),
    (0.00000731072, 3.80591233956, 1581.959348283),
    (0.00000691928, 6.13368222939, 2118.7638603784),
    (0.0000070919, 1.29272573658, 742.9900605326),
    (0.00000614464, 4.10853496756, 1478.8665740644),
    (0.00000495224, 3.75567461379, 323.5054166574),
    (0.00000581902, 4.53967717552, 309.2783226558),
    (0.00000375657, 4.70299124833, 1368.660252845),
    (0.00000389864, 4.89716105852, 1692.1656695024),
    (0.00000341006, 5.71452525783, 533.6231183577),
    (0.00000330458, 4.74049819491, 0.0481841098),
    (0.00000440854, 2.95818460943, 454.9093665273),
    (0.00000417266, 1.03554430161, 2.4476805548),
    (0.0000024417, 5.220208789, 728.762966531),
    (0.0000026154, 1.87652461032, 0.9632078465),
    (0.00000256568, 3.72410724159, 199.0720014364),
    (0.00000261009, 0.82047246448, 380.12776796),
    (0.00000220382, 1.65115015995, 543.9180590962),
    (0.00000201996, 1.80684574186, 1375.7737998458),
    (0.00000207327, 1.85461666594, 525.7588118315),
    (0.00000197046, 5.29252149016, 1155.361157407),
    (0.00000235141, 1.22693908124, 909.8187330546),
    (0.00000174809, 5.90973505276, 956.2891559706),
    (0.00000149368, 4.37745104275, 1685.0521225016),
    (0.00000175184, 3.22634903433, 1898.3512179396),
    (0.00000175191, 3.72966554761, 942.062061969),
    (0.00000157909, 4.36483921766, 1795.258443721),
    (0.00000137871, 1.31797920785, 1169.5882514086),
    (0.00000117495, 2.5002214089, 1596.1864422846),
    (0.00000150502, 3.90625022622, 74.7815985673),
    (0.00000116757, 3.38920921041, 0.5212648618),
    (0.00000105895, 4.55439798236, 526.5095713569),
    (0.00000130531, 4.16867945489, 1045.1548361876),
    (0.00000141445, 3.13568357861, 491.5579294568),
    (0.00000099511, 1.42117395747, 532.8723588323),
    (0.00000096137, 1.18156870005, 117.3198682202),
    (0.00000091758, 0.85756633461, 1272.6810256272),
    (0.00000087695, 1.21738140813, 453.424893819),
    (0.00000068507, 2.35242959478, 2.9207613068),
    (0.00000066098, 5.34386149468, 1471.7530270636),
    (0.00000077401, 4.42676337124, 39.3568759152),
    (0.00000072006, 4.23834923691, 2111.6503133776),
    (0.00000063406, 4.97665525033, 0.7507595254),
    (0.00000059427, 4.11130498612, 2001.4439921582),
    (0.00000062481, 0.51211384012, 220.4126424388),
    (0.00000066532, 2.98864358135, 2214.7430875962),
    (0.00000060194, 4.12628179571, 4.192785694),
    (0.00000056012, 1.15493222602, 21.3406410024),
    (0.00000052854, 0.91207215543, 10.2949407385),
    (0.00000070297, 5.14180555282, 835.0371344873),
    (0.00000051916, 4.1004818002, 1258.4539316256),
    (0.00000046442, 4.66531163524, 5.6290742925),
    (0.0000005819, 5.86646380344, 5753.3848848968),
    (0.00000040103, 4.68801114087, 0.1600586944),
    (0.00000046654, 4.79394835282, 305.3461693927),
    (0.00000039298, 4.25448423697, 853.196381752),
    (0.00000046042, 5.1098351515, 4.665866446),
    (0.00000054459, 1.57072704127, 983.1158589136),
    (0.0000003892, 6.0759290558, 518.6452648307),
    (0.0000003845, 2.43836870888, 433.7117378768),
    (0.000000468, 3.54640538283, 5.4166259714),
    (0.0000004183, 4.67982493646, 302.164775655),
    (0.0000003592, 2.45088036239, 430.5303441391),
    (0.00000037888, 0.21127448431, 2648.454825473),
    (0.0000003919, 1.71835571629, 11.0457002639),
    (0.00000037567, 6.19481310233, 831.8557407496),
    (0.00000035828, 4.61459907698, 2008.557539159),
    (0.00000043402, 0.14992289081, 528.2064923863),
    (0.00000031598, 5.14073450755, 1788.1448967202),
    (0.00000029849, 5.34441117167, 2221.856634597),
    (0.00000032811, 5.28907118836, 88.865680217),
    (0.00000027686, 1.85227036207, 0.2124483211),
    (0.0000002582, 3.85920882494, 2317.8358618148),
    (0.00000024705, 2.63495214991, 114.1384744825),
    (0.00000033844, 1.00563073268, 9683.5945811164),
    (0.00000024266, 3.82355417268, 1574.8458012822),
    (0.00000027111, 2.80845435102, 18.1592472647),
    (0.00000026837, 1.77586123775, 532.1386456494),
    (0.00000026064, 2.74361318804, 2531.1349572528),
    (0.00000030765, 0.42330537728, 1.4844727083),
    (0.00000030476, 3.66677894407, 508.3503240922),
    (0.00000023282, 3.24372142416, 984.6003316219),
    (0.00000019445, 0.52370214471, 14.977853527),
    (0.00000019332, 4.86314494382, 1361.5467058442),
    (0.0000002291, 3.84914895064, 2428.0421830342),
    (0.00000021617, 6.01696940024, 1063.3140834523),
    (0.00000020155, 5.59582008789, 527.2432845398),
    (0.00000023732, 2.52766031921, 494.2662424425),
    (0.00000020189, 1.01560227681, 628.8515860501),
    (0.00000015994, 5.09003530653, 529.7391492044),
    (0.00000016134, 5.27095037302, 142.4496501338),
    (0.00000020697, 4.03443281612, 355.7487455718),
    (0.00000021479, 1.28668134295, 35.4247226521),
    (0.00000014964, 4.8603968439, 2104.5367663768),
    (0.00000017242, 1.59187913206, 1439.5096981492),
    (0.00000015994, 1.89222417794, 529.6427809848),
    (0.00000017958, 4.30178016003, 6.1503391543),
    (0.00000013279, 2.18943981644, 1055.4497769261),
    (0.00000014148, 2.71597731671, 0.2606324309),
    (0.00000014689, 0.87944553412, 99.1606209555),
    (0.00000014202, 2.41335693735, 530.6541729411),
    (0.0000001532, 6.07703092728, 149.5631971346),
    (0.00000015832, 4.11682440678, 636.7158925763),
    (0.00000012398, 2.61042299578, 405.2575498736),
    (0.00000016199, 2.77035044582, 760.25553592),
    (0.00000013665, 3.5603967831, 217.2312487011),
    (0.00000015261, 2.81824770887, 621.7380390493),
    (0.00000014681, 6.26423732742, 569.0478410098),
    (0.00000012529, 1.39077179081, 7.065362891),
    (0.00000011677, 3.60447374272, 2634.2277314714),
    (0.00000011603, 4.60461756191, 7.1617311106),
    (0.00000012152, 0.24540531919, 1485.9801210652),
    (0.00000011347, 2.00818458261, 1073.6090241908),
    (0.00000011242, 2.4800094787, 423.4167971383),
    (0.00000010942, 5.03602448252, 458.8415197904),
    (0.00000011117, 4.04973271023, 519.3960243561),
    (0.00000012256, 4.30153222783, 604.4725636619),
    (0.00000013149, 2.72189077702, 1364.7280995819),
    (0.00000010604, 3.11518747072, 1.2720243872),
    (0.00000010851, 5.08554552028, 2324.9494088156),
    (0.00000010692, 2.51401681528, 2847.5268269094),
    (0.0000001264, 4.75572797691, 528.7277572481),
    (0.00000010084, 4.05599810206, 38.1330356378),
    (0.00000011536, 2.35034215745, 643.8294395771),
    (0.00000010247, 3.63479911496, 2744.4340526908),
    (0.00000010105, 3.65845333837, 107.0249274817),
    (0.00000010121, 1.31482648275, 1905.4647649404),
    (0.00000010128, 2.09034472544, 511.5317178299),
    (0.0000001063, 2.07777800288, 92.0470739547),
];

const L1: [Term; 51] = [
    (529.93480757497, 0.0, 0.0),
    (0.00489741194, 4.22066689928, 529.6909650946),
    (0.00228918538, 6.02647464016, 7.1135470008),
    (0.0002765538, 4.57265956824, 1059.3819301892),
    (0.00020720943, 5.45938936295, 522.5774180938),
    (0.00012105732, 0.16985765041, 536.8045120954),
    (0.00006068051, 4.42419502005, 103.0927742186),
    (0.00005433924, 3.98478382565, 419.4846438752),
    (0.00004237795, 5.89009351271, 14.2270940016),
    (0.00002211854, 5.26771446618, 206.1855484372),
    (0.00001295769, 5.55132765087, 3.1813937377),
    (0.00001745919, 4.92669378486, 1589.0728952838),
    (0.00001163411, 0.51450895328, 3.9321532631),
    (0.00001007216, 0.46478398551, 735.8765135318),
    (0.00001173129, 5.8564730435, 1052.2683831884),
    (0.00000847678, 5.7580585045, 110.2063212194),
    (0.00000827329, 4.80312015734, 213.299095438),
    (0.00001003574, 3.15040301822, 426.598190876),
    (0.00001098735, 5.30704981594, 515.463871093),
    (0.00000816397, 0.58643054886, 1066.49547719),
    (0.00000725447, 5.51827471473, 639.897286314),
    (0.00000567845, 5.98867049451, 625.6701923124),
    (0.00000474181, 4.13245269168, 412.3710968744),
    (0.0000041293, 5.73652891261, 95.9792272178),
    (0.00000335817, 3.73248749046, 1162.4747044078),
    (0.00000345249, 4.2415956541, 632.7837393132),
    (0.00000234066, 6.24302226646, 309.2783226558),
    (0.00000194784, 2.21879010911, 323.5054166574),
    (0.0000023434, 4.03469970332, 949.1756089698),
    (0.00000183938, 6.27963588822, 543.9180590962),
    (0.00000198525, 1.50458442825, 838.9692877504),
    (0.00000186899, 6.08620565908, 742.9900605326),
    (0.0000017138, 5.41655983845, 199.0720014364),
    (0.00000130771, 0.62643377351, 728.762966531),
    (0.00000107575, 4.49282760117, 956.2891559706),
    (0.00000115393, 0.68019050174, 846.0828347512),
    (0.00000115047, 5.28641699144, 2118.7638603784),
    (0.00000066824, 5.73365126533, 21.3406410024),
    (0.00000069618, 5.97263450278, 532.8723588323),
    (0.0000006485, 6.08803490288, 1581.959348283),
    (0.00000079686, 5.82412400273, 1045.1548361876),
    (0.00000057939, 0.99453087342, 1596.1864422846),
    (0.00000065635, 0.1292419143, 526.5095713569),
    (0.00000058509, 0.58626971028, 1155.361157407),
    (0.000000566, 1.41198438841, 533.6231183577),
    (0.00000071643, 5.34162650321, 942.062061969),
    (0.00000057368, 5.96851304799, 1169.5882514086),
    (0.00000054935, 5.42806383723, 10.2949407385),
    (0.00000052016, 0.22981299129, 1368.660252845),
    (0.00000052309, 5.72661448388, 117.3198682202),
    (0.00000050418, 6.08075147811, 525.7588118315),
];

const L2: [Term; 12] = [
    (0.00047233598, 4.32148323554, 7.1135470008),
    (0.00030629053, 2.93021440216, 529.6909650946),
    (0.0003896555, 0.0, 0.0),
    (0.00003189317, 1.05504615595, 522.5774180938),
    (0.00002723358, 3.41411526638, 1059.3819301892),
    (0.00002729292, 4.84545481351, 536.8045120954),
    (0.00001721069, 4.18734385158, 14.2270940016),
    (0.00000383258, 5.76790714387, 419.4846438752),
    (0.00000367498, 6.05509120409, 103.0927742186),
    (0.00000377524, 0.76048964872, 515.463871093),
    (0.00000337386, 3.78644384244, 3.1813937377),
    (0.000003082, 0.69356654052, 206.1855484372),
];

const L3: [Term; 2] = [
    (0.00006501665, 2.59862880482, 7.1135470008),
    (0.00001356524, 1.34635886411, 529.6909650946),
];

const B0: [Term; 56] = [
    (0.02268615703, 3.55852606718, 529.6909650946),
    (0.00109971634, 3.90809347389, 1059.3819301892),
    (0.00110090358, 0.0, 0.0),
    (0.00008101427, 3.60509573368, 522.5774180938),
    (0.00006043996, 4.25883108794, 1589.0728952838),
    (0.00006437782, 0.30627121409, 536.8045120954),
    (0.0000110688, 2.98534421928, 1162.4747044078),
    (0.00000941651, 2.93619072405, 1052.2683831884),
    (0.00000894088, 1.75447429921, 7.1135470008),
    (0.0000076728, 2.1547359406, 632.7837393132),
    (0.00000944328, 1.67522288396, 426.598190876),
    (0.0000068422, 3.67808770098, 213.299095438),
    (0.00000629223, 0.64343282328, 1066.49547719),
    (0.00000835861, 5.17881973234, 103.0927742186),
    (0.0000053167, 2.70305954352, 110.2063212194),
    (0.00000558524, 0.01354830508, 846.0828347512),
    (0.00000464449, 1.17337249185, 949.1756089698),
    (0.00000431072, 2.60825000494, 419.4846438752),
    (0.00000351433, 4.61062990714, 2118.7638603784),
    (0.00000123148, 3.34968181384, 1692.1656695024),
    (0.00000115038, 5.04892295442, 316.3918696566),
    (0.0000013216, 4.7781699067, 742.9900605326),
    (0.00000103402, 2.31878999565, 1478.8665740644),
    (0.00000116379, 1.38688232033, 323.5054166574),
    (0.0000010242, 3.15293785436, 1581.959348283),
    (0.00000103762, 3.7010383811, 515.463871093),
    (0.0000007865, 3.98318653238, 1265.5674786264),
    (0.00000069935, 2.56006216424, 956.2891559706),
    (0.00000055597, 0.37500753017, 1375.7737998458),
    (0.00000051986, 0.99007119033, 1596.1864422846),
    (0.00000055194, 0.40176412035, 525.7588118315),
    (0.00000063456, 4.50073574333, 735.8765135318),
    (0.00000049691, 0.18649893085, 543.9180590962),
    (0.00000048831, 3.57260550671, 533.6231183577),
    (0.00000028353, 1.53532744749, 625.6701923124),
    (0.00000029209, 5.43145863011, 206.1855484372),
    (0.00000023255, 5.95197992848, 838.9692877504),
    (0.00000022841, 6.19262787685, 532.8723588323),
    (0.00000023202, 4.06473368575, 526.5095713569),
    (0.00000024436, 6.10947656959, 1169.5882514086),
    (0.00000021116, 4.96322972735, 2648.454825473),
    (0.00000017879, 3.08704395969, 1795.258443721),
    (0.00000016234, 4.83515727869, 1368.660252845),
    (0.00000021314, 2.69476951059, 1045.1548361876),
    (0.0000001574, 1.15130330106, 942.062061969),
    (0.00000017325, 1.61550009206, 14.2270940016),
    (0.00000013396, 2.30539585502, 853.196381752),
    (0.00000011904, 3.09811974536, 2111.6503133776),
    (0.00000011734, 2.83006431723, 2008.557539159),
    (0.00000011291, 0.98957560201, 433.7117378768),
    (0.0000001183, 4.76527836803, 309.2783226558),
    (0.00000010702, 3.70181397065, 2221.856634597),
    (0.00000010815, 5.81958878617, 1272.6810256272),
    (0.00000013505, 3.2812697576, 1155.361157407),
    (0.00000010179, 2.58691128827, 117.3198682202),
    (0.00000010632, 5.23487936086, 95.9792272178),
];

const B1: [Term; 15] = [
    (0.00177351787, 5.70166488486, 529.6909650946),
    (0.00003230171, 5.7794161934, 1059.3819301892),
    (0.00003081364, 5.47464296527, 522.5774180938),
    (0.00002211914, 4.73477480209, 536.8045120954),
    (0.00000346445, 4.74595174109, 1052.2683831884),
    (0.00000234264, 5.18856099929, 1066.49547719),
    (0.00000196154, 6.18554286642, 7.1135470008),
    (0.00000150468, 3.92721226087, 1589.0728952838),
    (0.00000114128, 3.4389727183, 632.7837393132),
    (0.00000096667, 2.9142630409, 949.1756089698),
    (0.00000076599, 2.50522188662, 103.0927742186),
    (0.00000081671, 5.07666097497, 1162.4747044078),
    (0.00000076572, 0.61288981445, 419.4846438752),
    (0.00000073875, 5.49958292155, 515.463871093),
    (0.00000060544, 5.44740084359, 213.299095438),
];

const B2: [Term; 4] = [
    (0.00008094051, 1.46322843658, 529.6909650946),
    (0.00000742415, 0.95691639003, 522.5774180938),
    (0.00000398951, 2.89888666447, 536.8045120954),
    (0.00000342226, 1.44683789727, 1059.3819301892),
];

const R0: [Term; 98] = [
    (5.20887429471, 0.0, 0.0),
    (0.2520932702, 3.49108640015, 529.6909650946),
    (0.00610599902, 3.84115365602, 1059.3819301892),
    (0.00282029465, 2.57419879933, 632.7837393132),
    (0.00187647391, 2.07590380082, 522.5774180938),
    (0.00086792941, 0.71001090609, 419.4846438752),
    (0.00072062869, 0.21465694745, 536.8045120954),
    (0.00065517227, 5.97995850843, 316.3918696566),
    (0.0002913462, 1.6775924371, 103.0927742186),
    (0.00030135275, 2.16132058449, 949.1756089698),
    (0.00023453209, 3.54023147303, 735.8765135318),
    (0.0002228371, 4.19362773546, 1589.0728952838),
    (0.0002394734, 0.27457854894, 7.1135470008),
    (0.000130326, 2.96043055741, 1162.4747044078),
    (0.00009703346, 1.90669572402, 206.1855484372),
    (0.00012749004, 2.71550102862, 1052.2683831884),
    (0.00009161431, 4.41352618935, 213.299095438),
    (0.00007894539, 2.47907551404, 426.598190876),
    (0.00007057978, 2.18184753111, 1265.5674786264),
    (0.00006137755, 6.26417542514, 846.0828347512),
    (0.00005477093, 5.65729325169, 639.897286314),
    (0.00003502519, 0.56531297394, 1066.49547719),
    (0.0000413689, 2.72219979684, 625.6701923124),
    (0.00004170012, 2.01605033912, 515.463871093),
    (0.00002499966, 4.55182055941, 838.9692877504),
    (0.00002616955, 2.00993967129, 1581.959348283),
    (0.00001911876, 0.85621927419, 412.3710968744),
    (0.00002127644, 6.1275146175, 742.9900605326),
    (0.00001610549, 3.08867789275, 1368.660252845),
    (0.00001479484, 2.68026191372, 1478.8665740644),
    (0.00001230708, 1.89042979701, 323.5054166574),
    (0.0000121681, 1.80171561024, 110.2063212194),
    (0.00000961072, 4.54876989805, 2118.7638603784),
    (0.00000885708, 4.14785948471, 533.6231183577),
    (0.000007767, 3.6769695469, 728.762966531),
    (0.00000998579, 2.8720894011, 309.2783226558),
    (0.00001014959, 1.38673237666, 454.9093665273),
    (0.00000727162, 3.98824686402, 1155.361157407),
    (0.00000655289, 2.79065604219, 1685.0521225016),
    (0.00000821465, 1.59342534396, 1898.3512179396),
    (0.00000620798, 4.82284338962, 956.2891559706),
    (0.00000653981, 3.38150775269, 1692.1656695024),
    (0.00000812036, 5.94091899141, 909.8187330546),
    (0.0000056212, 0.08095987241, 543.9180590962),
    (0.00000542221, 0.28360266386, 525.7588118315),
    (0.00000457859, 0.1272269451, 1375.7737998458),
    (0.00000614784, 2.27624915604, 942.062061969),
    (0.00000435805, 2.60272129748, 95.9792272178),
    (0.00000496066, 5.53005947761, 380.12776796),
    (0.00000469965, 2.81896276101, 1795.258443721),
    (0.00000445003, 0.14623567024, 14.2270940016),
    (0.00000290869, 3.89339143564, 1471.7530270636),
    (0.00000276627, 2.52238450687, 2001.4439921582),
    (0.00000275084, 2.98863518924, 526.5095713569),
    (0.00000293875, 2.04938438861, 199.0720014364),
    (0.00000290985, 6.03131226226, 1169.5882514086),
    (0.00000338342, 2.79873192583, 1045.1548361876),
    (0.00000257482, 6.13395478303, 532.8723588323),
    (0.00000319013, 1.34803130803, 2214.7430875962),
    (0.00000309352, 5.36855804945, 1272.6810256272),
    (0.00000345804, 1.56404293688, 491.5579294568),
    (0.00000303364, 1.15407454372, 5753.3848848968),
    (0.00000192325, 0.91996333387, 1596.1864422846),
    (0.00000215398, 2.63572815848, 2111.6503133776),
    (0.00000200738, 2.37259566683, 1258.4539316256),
    (0.00000239036, 3.57397189838, 835.0371344873),
    (0.00000197073, 5.92859096863, 453.424893819),
    (0.0000013944, 3.63960322318, 1788.1448967202),
    (0.00000191373, 6.2825131187, 983.1158589136),
    (0.00000176551, 2.57669991654, 9683.5945811164),
    (0.00000123567, 2.26158186345, 2317.8358618148),
    (0.00000128176, 4.6658590767, 831.8557407496),
    (0.0000011243, 0.85604150812, 433.7117378768),
    (0.00000128817, 1.10567106595, 2531.1349572528),
    (0.0000009939, 4.50312054049, 518.6452648307),
    (0.0000009387, 2.7255387999, 853.196381752),
    (0.00000106481, 5.8146222229, 220.4126424388),
    (0.00000120188, 2.95156363556, 3.9321532631),
    (0.00000104002, 2.22221906187, 74.7815985673),
    (0.00000081655, 3.23481337678, 1361.5467058442),
    (0.00000112513, 4.86216964016, 528.2064923863),
    (0.00000079539, 0.8854224683, 430.5303441391),
    (0.00000085801, 2.11458386763, 1574.8458012822),
    (0.00000085685, 2.33823884827, 2428.0421830342),
    (0.00000068311, 3.35727048905, 2104.5367663768),
    (0.0000006957, 3.04164697156, 302.164775655),
    (0.00000069775, 3.22402404312, 305.3461693927),
    (0.0000006957, 0.20494979941, 532.1386456494),
    (0.00000056991, 2.00204191909, 2634.2277314714),
    (0.00000077062, 2.09816000231, 508.3503240922),
    (0.00000056716, 3.91743976711, 2221.856634597),
    (0.00000058325, 5.72360355252, 628.8515860501),
    (0.00000052485, 4.02485010492, 527.2432845398),
    (0.00000063645, 1.09973563964, 1364.7280995819),
    (0.00000053607, 0.87425992614, 2847.5268269094),
    (0.00000059598, 0.95822471775, 494.2662424425),
    (0.0000005796, 3.45779497978, 2008.557539159),
    (0.00000053206, 1.19800364308, 760.25553592),
];

const R1: [Term; 31] = [
    (0.01271801596, 2.64937511122, 529.6909650946),
    (0.00061661771, 3.00076251018, 1059.3819301892),
    (0.00053443592, 3.89717644226, 522.5774180938),
    (0.00031185167, 4.88276663526, 536.8045120954),
    (0.00041390257, 0.0, 0.0),
    (0.0001184719, 2.41329588176, 419.4846438752),
    (0.0000916636, 4.75979408587, 7.1135470008),
    (0.00003175763, 2.79297987071, 103.0927742186),
    (0.00003203446, 5.21083285476, 735.8765135318),
    (0.00003403605, 3.34688537997, 1589.0728952838),
    (0.00002600003, 3.63435101622, 206.1855484372),
    (0.00002412207, 1.46947308304, 426.598190876),
    (0.00002806064, 3.7422369358, 515.463871093),
    (0.00002676575, 4.33052878699, 1052.2683831884),
    (0.00002100507, 3.92762682306, 639.897286314),
    (0.00001646182, 5.30953510947, 1066.49547719),
    (0.00001641257, 4.41628669824, 625.6701923124),
    (0.00001049866, 3.16113622955, 213.299095438),
    (0.00001024802, 2.55432643018, 412.3710968744),
    (0.00000740996, 2.17094630558, 1162.4747044078),
    (0.00000806404, 2.6775080138, 632.7837393132),
    (0.00000676928, 6.2495347979, 838.9692877504),
    (0.00000468895, 4.70973463481, 543.9180590962),
    (0.00000444683, 0.40281181402, 323.5054166574),
    (0.00000567076, 4.57655414712, 742.9900605326),
    (0.00000415894, 5.36836018215, 728.762966531),
    (0.00000484689, 2.46882793186, 949.1756089698),
    (0.00000337555, 3.1678195112, 956.2891559706),
    (0.00000401738, 4.60528841541, 309.2783226558),
    (0.00000347378, 4.68148808722, 14.2270940016),
    (0.00000260753, 5.34290306101, 846.0828347512),
];

const R2: [Term; 5] = [
    (0.00079644833, 1.35865896596, 529.6909650946),
    (0.00008251618, 5.77773935444, 522.5774180938),
    (0.00007029864, 3.27476965833, 536.8045120954),
    (0.00005314006, 1.83835109712, 1059.3819301892),
    (0.00001860833, 2.97682139367, 7.1135470008),
];

pub(crate) const JUPITER: Series = Series {
    longitude: &[&L0, &L1, &L2, &L3],
    latitude: &[&B0, &B1, &B2],
    radius: &[&R0, &R1, &R2],
};
