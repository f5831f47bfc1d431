//! Mercury.

use super::{Series, Term};

const L0: [Term; 102] = [
    (4.40250710144, 0.0, 0.0),
    (0.40989414976, 1.48302034194, 26087.9031415742),
    (0.05046294199, 4.4778548954, 52175.8062831484),
    (0.00855346843, 1.16520322351, 78263.70942472259),
    (0.00165590362, 4.11969163181, 104351.61256629678),
    (0.00034561897, 0.77930765817, 130439.51570787099),
    (0.00007583476, 3.7134840051, 156527.41884944518),
    (0.0000355974, 1.51202669419, 1109.3785520934),
    (0.00001726012, 0.35832239908, 182615.32199101939),
    (0.00001803463, 4.1033317841, 5661.3320491522),
    (0.00001364682, 4.59918318745, 27197.2816936676),
    (0.00001589923, 2.99510417815, 25028.521211385),
    (0.00001017332, 0.8803143904, 31749.2351907264),
    (0.00000714182, 1.54144865265, 24978.5245894808),
    (0.00000643759, 5.30266110787, 21535.9496445154),
    (0.000004042, 3.28228847025, 208703.22513259358),
    (0.00000352441, 5.24156297101, 20426.571092422),
    (0.00000343313, 5.76531885335, 955.5997416086),
    (0.00000339214, 5.86327765, 25558.2121764796),
    (0.00000451137, 6.04989275289, 51116.4243529592),
    (0.00000325335, 1.3367433478, 53285.1848352418),
    (0.00000259587, 0.98732428184, 4551.9534970588),
    (0.00000345212, 2.79211901539, 15874.6175953632),
    (0.00000272947, 2.49451163975, 529.6909650946),
    (0.0000023483, 0.266721189, 11322.6640983044),
    (0.00000238793, 0.11343953378, 1059.3819301892),
    (0.00000264336, 3.91705094013, 57837.1383323006),
    (0.00000216645, 0.65987207348, 13521.7514415914),
    (0.00000183359, 2.62878670784, 27043.5028831828),
    (0.00000175965, 4.53636829858, 51066.427731055),
    (0.00000181629, 2.43413502466, 25661.3049506982),
    (0.00000208995, 2.09178234008, 47623.8527860896),
    (0.00000172643, 2.45200164173, 24498.8302462904),
    (0.00000142316, 3.36003948842, 37410.5672398786),
    (0.00000137942, 0.29098447849, 10213.285546211),
    (0.00000118233, 2.78149786369, 77204.32749453338),
    (0.0000009686, 6.2039820274, 234791.12827416777),
    (0.00000125219, 3.72079804425, 39609.6545831656),
    (0.00000086819, 2.64219349385, 51646.11531805379),
    (0.00000086723, 1.9595304265, 46514.4742339962),
    (0.00000088329, 5.41338795963, 26617.5941066688),
    (0.00000106422, 4.20572116254, 19804.8272915828),
    (0.00000089987, 5.85243631094, 41962.5207369374),
    (0.00000084971, 4.33100364958, 79373.08797681599),
    (0.00000069247, 4.19446437496, 19.66976089979),
    (0.00000063463, 3.14700877722, 7238.6755916),
    (0.00000068493, 0.63424819267, 83925.04147387479),
    (0.00000069729, 3.57201709671, 25132.3033999656),
    (0.00000059481, 2.74692752, 16983.9961474566),
    (0.0000006483, 0.0476292581, 33326.5787331742),
    (0.00000055376, 4.05312663019, 30639.856638633),
    (0.00000054442, 3.14331542453, 27147.28507176339),
    (0.0000004756, 5.49722099211, 3.881335358),
    (0.00000049567, 3.98985863874, 6770.7106012456),
    (0.00000056531, 5.11920557675, 73711.75592766379),
    (0.00000041764, 5.64185159566, 53131.406024757),
    (0.00000051458, 5.47786463494, 50586.73338786459),
    (0.00000044744, 1.22366857463, 77154.33087262919),
    (0.00000041882, 5.19309298528, 6283.0758499914),
    (0.00000038045, 2.43117327523, 12566.1516999828),
    (0.00000035627, 0.81390126585, 32858.61374281979),
    (0.00000048007, 5.49260554912, 51749.20809227239),
    (0.00000035392, 3.36964859355, 36301.18868778519),
    (0.00000033951, 2.78618091049, 14765.2390432698),
    (0.0000003056, 5.84045074182, 43071.8992890308),
    (0.00000035964, 1.4238083863, 2218.7571041868),
    (0.00000034044, 0.47470299167, 65697.55772473979),
    (0.000000308, 5.77017310191, 103292.23063610759),
    (0.00000028496, 0.65048992658, 426.598190876),
    (0.00000026215, 5.24158618719, 22645.32819660879),
    (0.00000026253, 0.64807043102, 1589.0728952838),
    (0.00000029538, 0.69771244088, 213.299095438),
    (0.00000027504, 0.98010127839, 45892.73043315699),
    (0.00000022347, 5.65335125838, 77734.01845962799),
    (0.00000022047, 4.93398225193, 72602.37737557039),
    (0.00000022275, 2.17909842576, 52705.49724824299),
    (0.00000024252, 4.39994170609, 7.1135470008),
    (0.00000026751, 1.06145361792, 3442.5749449654),
    (0.00000023656, 2.84168536986, 260879.03141574195),
    (0.00000022908, 2.58462026514, 68050.42387851159),
    (0.00000027086, 0.08501738669, 63498.47038145279),
    (0.00000022247, 3.22418265191, 25448.00585526019),
    (0.00000017803, 3.61202297483, 110012.94461544899),
    (0.00000022407, 1.02520094825, 105460.99111839019),
    (0.00000017576, 4.71742326981, 25874.6040461362),
    (0.00000018586, 4.52709871258, 28306.66024576099),
    (0.00000014176, 6.12394176563, 53235.18821333759),
    (0.00000014186, 5.14246797066, 26068.2333806744),
    (0.00000017244, 0.28394746813, 51220.20654153979),
    (0.00000017176, 3.26084092971, 153.7788104848),
    (0.00000014938, 1.83542009339, 99799.65906923798),
    (0.00000013387, 0.76564655407, 56727.7597802072),
    (0.00000013978, 2.30193139916, 76674.63652943878),
    (0.00000014428, 0.96646356501, 26107.57290247399),
    (0.0000001199, 6.20492907598, 18849.2275499742),
    (0.00000014381, 1.90956715654, 23969.1392811958),
    (0.00000011233, 2.04817126136, 32370.9789915656),
    (0.00000013392, 4.51750784605, 26080.78959457339),
    (0.00000011632, 2.3849686026, 79219.30916633119),
    (0.00000012412, 2.22280944169, 77837.11123384659),
    (0.00000011543, 4.17789167759, 103242.23401420339),
    (0.00000011146, 3.78292300417, 26301.2022370122),
];

const L1: [Term; 13] = [
    (26088.14706222746, 0.0, 0.0),
    (0.01126007832, 6.21703970996, 26087.9031415742),
    (0.00303471395, 3.05565472363, 52175.8062831484),
    (0.00080538452, 6.10454743366, 78263.70942472259),
    (0.00021245035, 2.83531934452, 104351.61256629678),
    (0.00005592094, 5.82675673328, 130439.51570787099),
    (0.00001472233, 2.51845458395, 156527.41884944518),
    (0.00000352244, 3.05238094403, 1109.3785520934),
    (0.00000388318, 5.48039225891, 182615.32199101939),
    (0.0000009354, 6.11791163931, 27197.2816936676),
    (0.00000090579, 0.00045481669, 24978.5245894808),
    (0.00000102743, 2.14879173777, 208703.22513259358),
    (0.00000051941, 5.62107554052, 5661.3320491522),
];

const L2: [Term; 6] = [
    (0.00053049845, 0.0, 0.0),
    (0.00016903658, 4.69072300649, 26087.9031415742),
    (0.00007396711, 1.34735624669, 52175.8062831484),
    (0.00003018297, 4.45643539705, 78263.70942472259),
    (0.00001107419, 1.26226537554, 104351.61256629678),
    (0.00000378173, 4.319980559, 130439.51570787099),
];

const B0: [Term; 53] = [
    (0.11737528962, 1.98357498767, 26087.9031415742),
    (0.02388076996, 5.03738959685, 52175.8062831484),
    (0.0054325181, 1.79644363963, 78263.70942472259),
    (0.0012977877, 4.83232503961, 104351.61256629678),
    (0.00031866927, 1.58088495667, 130439.51570787099),
    (0.00007963301, 4.60972126348, 156527.41884944518),
    (0.00002014189, 1.35324164694, 182615.32199101939),
    (0.00000513953, 4.37835409309, 208703.22513259358),
    (0.00000207674, 4.91772564073, 27197.2816936676),
    (0.00000208584, 2.02020294153, 24978.5245894808),
    (0.00000132013, 1.11908492283, 234791.12827416777),
    (0.00000100454, 5.65684734206, 20426.571092422),
    (0.00000121395, 1.81271752059, 53285.1848352418),
    (0.00000091566, 2.28163128692, 25028.521211385),
    (0.00000099214, 0.09391887097, 51116.4243529592),
    (0.00000094574, 1.24184909234, 31749.2351907264),
    (0.00000078785, 4.4072588, 57837.1383323006),
    (0.00000077747, 0.52557061749, 1059.3819301892),
    (0.00000084264, 5.08510388314, 51066.427731055),
    (0.00000049948, 3.49752993688, 5661.3320491522),
    (0.00000046454, 3.23739270829, 77204.32749453338),
    (0.00000044767, 4.87849816734, 79373.08797681599),
    (0.00000040766, 2.46558332165, 46514.4742339962),
    (0.00000037378, 4.45768797944, 4551.9534970588),
    (0.00000034082, 4.14209210575, 260879.03141574195),
    (0.00000035911, 1.09057317869, 1109.3785520934),
    (0.00000031953, 1.18516389747, 83925.04147387479),
    (0.00000030954, 3.5032802721, 21535.9496445154),
    (0.00000031808, 2.41474588439, 47623.8527860896),
    (0.00000028691, 1.84828614269, 77154.33087262919),
    (0.00000025765, 2.77593370583, 27043.5028831828),
    (0.00000025199, 3.5906226646, 27147.28507176339),
    (0.00000020244, 3.06833797229, 51646.11531805379),
    (0.00000018591, 5.5842727444, 73711.75592766379),
    (0.00000016971, 0.02791276551, 103292.23063610759),
    (0.00000020099, 4.06593040301, 25132.3033999656),
    (0.00000017002, 6.13739392193, 41962.5207369374),
    (0.00000014984, 1.64717994813, 105460.99111839019),
    (0.00000014186, 0.33074185469, 10213.285546211),
    (0.00000015577, 6.07693643204, 53131.406024757),
    (0.00000015795, 3.79629547258, 529.6909650946),
    (0.00000014011, 5.52786452723, 72602.37737557039),
    (0.00000012309, 3.16626298867, 14765.2390432698),
    (0.00000011261, 0.11326534696, 13521.7514415914),
    (0.00000012448, 4.05109331029, 39609.6545831656),
    (0.00000013044, 3.48016433624, 37410.5672398786),
    (0.00000011042, 4.23192662377, 110012.94461544899),
    (0.00000011152, 0.5565846182, 63498.47038145279),
    (0.00000010717, 1.53686240986, 25661.3049506982),
    (0.00000010213, 2.87881017166, 12566.1516999828),
    (0.00000011047, 5.79741510309, 51749.20809227239),
    (0.0000001046, 5.82962163777, 50586.73338786459),
    (0.00000012866, 4.81650804018, 30639.856638633),
];

const B1: [Term; 8] = [
    (0.00429151362, 3.50169780393, 26087.9031415742),
    (0.00022675295, 0.0151536688, 52175.8062831484),
    (0.00010894981, 0.48540174006, 78263.70942472259),
    (0.00006353462, 3.42943919982, 104351.61256629678),
    (0.00002495743, 0.16051210665, 130439.51570787099),
    (0.00000859585, 3.18452433647, 156527.41884944518),
    (0.00000277503, 6.21020774184, 182615.32199101939),
    (0.00000086233, 2.95244391822, 208703.22513259358),
];

const B2: [Term; 4] = [
    (0.00011830934, 4.79065585784, 26087.9031415742),
    (0.00001913516, 0.0, 0.0),
    (0.00001044801, 1.21216540536, 52175.8062831484),
    (0.00000266213, 4.43418336532, 78263.70942472259),
];

const R0: [Term; 67] = [
    (0.39528271652, 0.0, 0.0),
    (0.07834131817, 6.19233722599, 26087.9031415742),
    (0.00795525557, 2.95989690096, 52175.8062831484),
    (0.00121281763, 6.01064153805, 78263.70942472259),
    (0.00021921969, 2.77820093975, 104351.61256629678),
    (0.00004354065, 5.82894543257, 130439.51570787099),
    (0.00000918228, 2.59650562598, 156527.41884944518),
    (0.00000260033, 3.02817753482, 27197.2816936676),
    (0.00000289955, 1.42441936951, 25028.521211385),
    (0.00000201855, 5.6472504035, 182615.32199101939),
    (0.00000201499, 5.59227724202, 31749.2351907264),
    (0.0000014198, 6.25264202645, 24978.5245894808),
    (0.00000100144, 3.73435608689, 21535.9496445154),
    (0.00000077561, 3.66972526976, 20426.571092422),
    (0.00000063277, 4.29905918105, 25558.2121764796),
    (0.00000062951, 4.76588899933, 1059.3819301892),
    (0.00000066754, 2.52520309182, 5661.3320491522),
    (0.000000755, 4.47428642962, 51116.4243529592),
    (0.00000048266, 6.06824478778, 53285.1848352418),
    (0.00000045748, 2.41480951648, 208703.22513259358),
    (0.00000035224, 1.05917802674, 27043.5028831828),
    (0.00000040815, 2.35882016415, 57837.1383323006),
    (0.00000044234, 1.21957314874, 15874.6175953632),
    (0.00000033873, 0.86381554651, 25661.3049506982),
    (0.00000037203, 0.5173382147, 47623.8527860896),
    (0.00000030092, 1.79500530627, 37410.5672398786),
    (0.00000028417, 3.02063625668, 51066.427731055),
    (0.00000030903, 0.88366335532, 24498.8302462904),
    (0.00000026105, 2.15021963174, 39609.6545831656),
    (0.00000018699, 4.96496008403, 11322.6640983044),
    (0.0000002127, 5.36857139841, 13521.7514415914),
    (0.00000019422, 4.98378647655, 10213.285546211),
    (0.00000016941, 3.88765393402, 26617.5941066688),
    (0.00000015109, 0.44510589948, 46514.4742339962),
    (0.00000017087, 1.24077764194, 77204.32749453338),
    (0.0000001394, 1.62573946865, 27147.28507176339),
    (0.00000013382, 1.07657890477, 51646.11531805379),
    (0.00000015012, 4.28173463507, 41962.5207369374),
    (0.00000013977, 4.77056848793, 33326.5787331742),
    (0.00000012794, 6.06437138766, 1109.3785520934),
    (0.00000013938, 1.99984876578, 25132.3033999656),
    (0.00000016297, 2.63293587817, 19804.8272915828),
    (0.00000011933, 2.36500939134, 4551.9534970588),
    (0.00000010612, 5.46555460932, 234791.12827416777),
    (0.00000012754, 2.07613721222, 529.6909650946),
    (0.00000012069, 2.84997619452, 79373.08797681599),
    (0.00000009069, 1.21263611811, 14765.2390432698),
    (0.00000009491, 0.83697007534, 12566.1516999828),
    (0.00000009379, 5.41195286503, 83925.04147387479),
    (0.00000007499, 2.44636811119, 30639.856638633),
    (0.00000007463, 5.53233943198, 32858.61374281979),
    (0.00000007215, 1.17101960691, 16983.9961474566),
    (0.00000008492, 3.56622930635, 73711.75592766379),
    (0.00000007109, 5.32625264624, 426.598190876),
    (0.00000006863, 1.82313992707, 36301.18868778519),
    (0.0000000656, 4.27818149213, 43071.8992890308),
    (0.00000008853, 3.87737694074, 50586.73338786459),
    (0.00000006885, 5.3110852663, 1589.0728952838),
    (0.00000005943, 4.06893157254, 53131.406024757),
    (0.00000007653, 3.91505031889, 51749.20809227239),
    (0.0000000646, 6.07127449283, 77154.33087262919),
    (0.00000005415, 5.20028107807, 65697.55772473979),
    (0.00000005186, 3.56743214904, 6283.0758499914),
    (0.0000000409, 3.6759365871, 22645.32819660879),
    (0.00000004075, 4.29142111073, 103292.23063610759),
    (0.00000004428, 5.69109527379, 45892.73043315699),
    (0.0000000412, 1.65386255382, 25448.00585526019),
];

const R1: [Term; 8] = [
    (0.00217347739, 4.65617158663, 26087.9031415742),
    (0.00044141826, 1.42385543975, 52175.8062831484),
    (0.00010094479, 4.47466326316, 78263.70942472259),
    (0.00002432804, 1.24226083435, 104351.61256629678),
    (0.00001624367, 0.0, 0.0),
    (0.00000603996, 4.29303116561, 130439.51570787099),
    (0.00000152851, 1.0606077981, 156527.41884944518),
    (0.00000039202, 4.11136751416, 182615.32199101939),
];

const R2: [Term; 4] = [
    (0.00003117867, 3.08231840296, 26087.9031415742),
    (0.00001245396, 6.15183317423, 52175.8062831484),
    (0.00000424822, 2.9258335296, 78263.70942472259),
    (0.0000013613, 5.97983925842, 104351.61256629678),
];

pub(crate) const MERCURY: Series = Series {
    longitude: &[&L0, &L1, &L2],
    latitude: &[&B0, &B1, &B2],
    radius: &[&R0, &R1, &R2],
};
